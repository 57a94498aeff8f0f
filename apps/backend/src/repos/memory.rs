//! In-memory catalog and roster store for local tooling and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::players::PlayerCatalog;
use super::rosters::RosterStore;
use crate::domain::{Player, Roster};
use crate::errors::domain::DomainError;

/// Fixed catalog; `list_players` sorts by name, keeping insertion order for
/// equal names.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    players: Vec<Player>,
}

impl InMemoryCatalog {
    pub fn new(players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            players: players.into_iter().collect(),
        }
    }
}

#[async_trait]
impl PlayerCatalog for InMemoryCatalog {
    async fn list_players(&self) -> Result<Vec<Player>, DomainError> {
        let mut players = self.players.clone();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(players)
    }

    async fn find_player(&self, name: &str) -> Result<Option<Player>, DomainError> {
        Ok(self.players.iter().find(|p| p.name == name).cloned())
    }

    async fn find_players(&self, names: &[String]) -> Result<Vec<Player>, DomainError> {
        Ok(self
            .players
            .iter()
            .filter(|p| names.contains(&p.name))
            .cloned()
            .collect())
    }
}

/// Last-write-wins map keyed by user id.
#[derive(Debug, Default)]
pub struct InMemoryRosterStore {
    rosters: RwLock<HashMap<String, Roster>>,
}

impl InMemoryRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.rosters.read().await.len()
    }
}

#[async_trait]
impl RosterStore for InMemoryRosterStore {
    async fn get_roster(&self, user_id: &str) -> Result<Option<Roster>, DomainError> {
        Ok(self.rosters.read().await.get(user_id).cloned())
    }

    async fn put_roster(&self, roster: &Roster) -> Result<Roster, DomainError> {
        let mut rosters = self.rosters.write().await;
        let stored = match rosters.get(&roster.user_id) {
            // created_at sticks to the first write, as in the table upsert
            Some(existing) => Roster {
                created_at: existing.created_at,
                ..roster.clone()
            },
            None => roster.clone(),
        };
        rosters.insert(stored.user_id.clone(), stored.clone());
        Ok(stored)
    }
}
