use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use serde_json::Value;

use crate::entities::{prelude::*, searches};
use crate::models::lookup::LookupKind;

pub struct SearchRepository {
    conn: DatabaseConnection,
}

impl SearchRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Appends one history row. The `results` value is stored serialized and
    /// is never interpreted again server-side.
    pub async fn add(&self, kind: LookupKind, query: &str, results: &Value) -> Result<i64> {
        let active_model = searches::ActiveModel {
            kind: Set(kind.as_str().to_string()),
            query: Set(query.to_string()),
            results: Set(results.to_string()),
            timestamp: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        let result = Searches::insert(active_model).exec(&self.conn).await?;
        Ok(result.last_insert_id)
    }

    /// Newest first, capped at `limit`. Ordered on the autoincrement id,
    /// which tracks insertion order exactly even when two rows share a
    /// timestamp string.
    pub async fn recent(&self, limit: u64) -> Result<Vec<searches::Model>> {
        let entries = Searches::find()
            .order_by_desc(searches::Column::Id)
            .limit(limit)
            .all(&self.conn)
            .await?;

        Ok(entries)
    }
}
