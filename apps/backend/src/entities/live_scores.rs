use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Player catalog row. Written by the stats pipeline, read-only here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "live_scores")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "tournament_name")]
    pub tournament_name: String,
    pub team: String,
    pub player: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub tournaments: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub games: Option<String>,
    pub assists: i32,
    pub goals: i32,
    pub ds: i32,
    pub turnovers: i32,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    #[sea_orm(column_name = "games_played")]
    pub games_played: i32,
    #[sea_orm(column_name = "captain_score", column_type = "Double")]
    pub captain_score: f64,
    #[sea_orm(column_name = "handler_score", column_type = "Double")]
    pub handler_score: f64,
    #[sea_orm(column_name = "cutter_score", column_type = "Double")]
    pub cutter_score: f64,
    #[sea_orm(column_name = "defender_score", column_type = "Double")]
    pub defender_score: f64,
    pub questionable: bool,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
