//! Catalog seeding. The app never writes `live_scores`, so tests go
//! through the adapter directly.

use fantasy_backend::adapters::live_scores_sea::{self, LiveScoreCreate};
use fantasy_backend::entities::live_scores;
use fantasy_backend::error::AppError;
use sea_orm::ConnectionTrait;

/// Insert a player with per-position scores (captain, handler, cutter, defender).
pub async fn seed_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    team: &str,
    scores: [f64; 4],
) -> Result<live_scores::Model, AppError> {
    let dto = LiveScoreCreate::new(name, team)
        .with_scores(scores)
        .with_price(12.5)
        .with_tournament("Nationals");
    Ok(live_scores_sea::insert(conn, dto).await?)
}
