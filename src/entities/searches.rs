use sea_orm::entity::prelude::*;
use serde::Serialize;

/// One row per lookup, appended after aggregation. Never updated or deleted.
/// `results` holds the serialized merged object (or the social candidate
/// list) exactly as it was returned to the caller.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "searches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub query: String,
    pub results: String,
    pub timestamp: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
