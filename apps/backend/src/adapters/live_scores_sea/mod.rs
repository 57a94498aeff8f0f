//! SeaORM adapter for the player catalog.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::live_scores;

pub mod dto;

pub use dto::LiveScoreCreate;

/// Whole catalog ordered by player name; id breaks ties so duplicates keep
/// insertion order.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<live_scores::Model>, sea_orm::DbErr> {
    live_scores::Entity::find()
        .order_by_asc(live_scores::Column::Player)
        .order_by_asc(live_scores::Column::Id)
        .all(conn)
        .await
}

/// First row carrying `player`, if any.
pub async fn find_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player: &str,
) -> Result<Option<live_scores::Model>, sea_orm::DbErr> {
    live_scores::Entity::find()
        .filter(live_scores::Column::Player.eq(player))
        .order_by_asc(live_scores::Column::Id)
        .one(conn)
        .await
}

/// Rows for any of `players`, in insertion order.
pub async fn find_by_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    players: &[String],
) -> Result<Vec<live_scores::Model>, sea_orm::DbErr> {
    if players.is_empty() {
        return Ok(Vec::new());
    }
    live_scores::Entity::find()
        .filter(live_scores::Column::Player.is_in(players.iter().cloned()))
        .order_by_asc(live_scores::Column::Id)
        .all(conn)
        .await
}

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: LiveScoreCreate,
) -> Result<live_scores::Model, sea_orm::DbErr> {
    let active = live_scores::ActiveModel {
        id: NotSet,
        tournament_name: Set(dto.tournament_name),
        team: Set(dto.team),
        player: Set(dto.player),
        tournaments: Set(dto.tournaments),
        games: Set(dto.games),
        assists: Set(dto.assists),
        goals: Set(dto.goals),
        ds: Set(dto.ds),
        turnovers: Set(dto.turnovers),
        price: Set(dto.price),
        games_played: Set(dto.games_played),
        captain_score: Set(dto.captain_score),
        handler_score: Set(dto.handler_score),
        cutter_score: Set(dto.cutter_score),
        defender_score: Set(dto.defender_score),
        questionable: Set(dto.questionable),
        updated_at: Set(dto.updated_at),
    };
    active.insert(conn).await
}
