use tracing::debug;

use crate::domain::{validate_player_name, Player};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::PlayerCatalog;

pub async fn list_players(catalog: &dyn PlayerCatalog) -> Result<Vec<Player>, DomainError> {
    let players = catalog.list_players().await?;
    debug!(count = players.len(), "catalog listed");
    Ok(players)
}

/// One catalog entry by exact name.
pub async fn get_player(catalog: &dyn PlayerCatalog, name: &str) -> Result<Player, DomainError> {
    validate_player_name(name)?;
    catalog.find_player(name).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("Player '{name}' not found"))
    })
}
