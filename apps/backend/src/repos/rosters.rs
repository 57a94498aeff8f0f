//! Roster store keyed by user id.

use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use crate::adapters::user_teams_sea::{self as adapter, UserTeamUpsert};
use crate::domain::Roster;
use crate::entities::user_teams;
use crate::errors::domain::DomainError;

#[async_trait]
pub trait RosterStore: Send + Sync {
    /// `None` until the user's first successful assignment.
    async fn get_roster(&self, user_id: &str) -> Result<Option<Roster>, DomainError>;

    /// Full-record upsert keyed on `user_id`; returns what was stored.
    async fn put_roster(&self, roster: &Roster) -> Result<Roster, DomainError>;
}

/// Store over the `user_teams` table on any connection or transaction.
pub struct SeaRosterStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait + Send + Sync> SeaRosterStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<C: ConnectionTrait + Send + Sync> RosterStore for SeaRosterStore<'_, C> {
    async fn get_roster(&self, user_id: &str) -> Result<Option<Roster>, DomainError> {
        let row = adapter::find_by_user_id(self.conn, user_id).await?;
        Ok(row.map(Roster::from))
    }

    async fn put_roster(&self, roster: &Roster) -> Result<Roster, DomainError> {
        let row = adapter::upsert(self.conn, UserTeamUpsert::from(roster)).await?;
        Ok(Roster::from(row))
    }
}

impl From<user_teams::Model> for Roster {
    fn from(model: user_teams::Model) -> Self {
        Self {
            user_id: model.user_id,
            captain: model.captain,
            handler_1: model.handler_1,
            handler_2: model.handler_2,
            cutter_1: model.cutter_1,
            cutter_2: model.cutter_2,
            defender_1: model.defender_1,
            defender_2: model.defender_2,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<&Roster> for UserTeamUpsert {
    fn from(roster: &Roster) -> Self {
        Self {
            user_id: roster.user_id.clone(),
            captain: roster.captain.clone(),
            handler_1: roster.handler_1.clone(),
            handler_2: roster.handler_2.clone(),
            cutter_1: roster.cutter_1.clone(),
            cutter_2: roster.cutter_2.clone(),
            defender_1: roster.defender_1.clone(),
            defender_2: roster.defender_2.clone(),
            created_at: roster.created_at,
            updated_at: roster.updated_at,
        }
    }
}
