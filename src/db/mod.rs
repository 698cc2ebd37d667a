use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::entities::searches;
use crate::models::lookup::LookupKind;

pub mod migrator;
pub mod repositories;

pub use crate::entities::searches::Model as SearchEntry;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn search_repo(&self) -> repositories::search::SearchRepository {
        repositories::search::SearchRepository::new(self.conn.clone())
    }

    pub async fn record_search(
        &self,
        kind: LookupKind,
        query: &str,
        results: &Value,
    ) -> Result<i64> {
        self.search_repo().add(kind, query, results).await
    }

    pub async fn recent_searches(&self, limit: u64) -> Result<Vec<searches::Model>> {
        self.search_repo().recent(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn memory_store() -> Store {
        // One connection only: each connection to :memory: is its own db.
        Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .expect("in-memory store")
    }

    #[tokio::test]
    async fn record_and_read_back() {
        let store = memory_store().await;

        let id = store
            .record_search(LookupKind::Ip, "8.8.8.8", &json!({"geo": {"city": "x"}}))
            .await
            .unwrap();
        assert!(id > 0);

        let entries = store.recent_searches(50).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, "ip");
        assert_eq!(entries[0].query, "8.8.8.8");

        let results: Value = serde_json::from_str(&entries[0].results).unwrap();
        assert_eq!(results["geo"]["city"], "x");
    }

    #[tokio::test]
    async fn recent_is_newest_first_and_capped() {
        let store = memory_store().await;

        for i in 0..60 {
            store
                .record_search(LookupKind::Phone, &format!("+1555000{i:04}"), &json!({}))
                .await
                .unwrap();
        }

        let entries = store.recent_searches(50).await.unwrap();
        assert_eq!(entries.len(), 50);

        for pair in entries.windows(2) {
            assert!(pair[0].id > pair[1].id);
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }

        // The newest entry is the last one inserted.
        assert_eq!(entries[0].query, "+15550000059");
    }

    #[tokio::test]
    async fn duplicate_queries_append_duplicate_rows() {
        let store = memory_store().await;

        store
            .record_search(LookupKind::Email, "a@b.c", &json!({}))
            .await
            .unwrap();
        store
            .record_search(LookupKind::Email, "a@b.c", &json!({}))
            .await
            .unwrap();

        let entries = store.recent_searches(50).await.unwrap();
        assert_eq!(entries.len(), 2);
    }
}
