use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One roster per user; slots hold player names.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "user_id", unique)]
    pub user_id: String,
    pub captain: Option<String>,
    #[sea_orm(column_name = "handler_1")]
    pub handler_1: Option<String>,
    #[sea_orm(column_name = "handler_2")]
    pub handler_2: Option<String>,
    #[sea_orm(column_name = "cutter_1")]
    pub cutter_1: Option<String>,
    #[sea_orm(column_name = "cutter_2")]
    pub cutter_2: Option<String>,
    #[sea_orm(column_name = "defender_1")]
    pub defender_1: Option<String>,
    #[sea_orm(column_name = "defender_2")]
    pub defender_2: Option<String>,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
