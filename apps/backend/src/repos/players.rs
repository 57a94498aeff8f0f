//! Player catalog (read-only).

use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use crate::adapters::live_scores_sea as adapter;
use crate::domain::Player;
use crate::entities::live_scores;
use crate::errors::domain::DomainError;

#[async_trait]
pub trait PlayerCatalog: Send + Sync {
    /// Every catalog row, ordered by player name.
    async fn list_players(&self) -> Result<Vec<Player>, DomainError>;

    async fn find_player(&self, name: &str) -> Result<Option<Player>, DomainError>;

    /// Rows whose name is in `names`, in catalog order. Unknown names are
    /// simply absent from the result.
    async fn find_players(&self, names: &[String]) -> Result<Vec<Player>, DomainError>;
}

/// Catalog over the `live_scores` table on any connection or transaction.
pub struct SeaPlayerCatalog<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait + Send + Sync> SeaPlayerCatalog<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C: ConnectionTrait + Send + Sync> PlayerCatalog for SeaPlayerCatalog<'_, C> {
    async fn list_players(&self) -> Result<Vec<Player>, DomainError> {
        let rows = adapter::list_all(self.conn).await?;
        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn find_player(&self, name: &str) -> Result<Option<Player>, DomainError> {
        let row = adapter::find_by_player(self.conn, name).await?;
        Ok(row.map(Player::from))
    }

    async fn find_players(&self, names: &[String]) -> Result<Vec<Player>, DomainError> {
        let rows = adapter::find_by_players(self.conn, names).await?;
        Ok(rows.into_iter().map(Player::from).collect())
    }
}

impl From<live_scores::Model> for Player {
    fn from(model: live_scores::Model) -> Self {
        Self {
            name: model.player,
            team: model.team,
            tournament_name: model.tournament_name,
            price: model.price,
            games_played: model.games_played,
            assists: model.assists,
            goals: model.goals,
            ds: model.ds,
            turnovers: model.turnovers,
            captain_score: model.captain_score,
            handler_score: model.handler_score,
            cutter_score: model.cutter_score,
            defender_score: model.defender_score,
            questionable: model.questionable,
            tournaments: model.tournaments,
            games: model.games,
            updated_at: model.updated_at,
        }
    }
}
