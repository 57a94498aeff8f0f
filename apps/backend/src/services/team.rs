use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::domain::{
    self, slot_scores, total_score, validate_player_name, PlayerIndex, Position, Roster, Slot,
    SlotScore,
};
use crate::errors::domain::DomainError;
use crate::logging::pii::redact_sub;
use crate::repos::{PlayerCatalog, RosterStore};

/// What the team page renders: the stored roster and its live score.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamView {
    /// `None` until the first assignment
    pub roster: Option<Roster>,
    pub slots: Vec<SlotScore>,
    pub total: f64,
}

impl TeamView {
    fn empty() -> Self {
        Self {
            roster: None,
            slots: Vec::new(),
            total: 0.0,
        }
    }
}

/// Score `roster` against the catalog.
///
/// A failing catalog is logged and treated as empty, so every slot scores 0
/// instead of the page failing.
pub async fn score_roster(catalog: &dyn PlayerCatalog, roster: Option<Roster>) -> TeamView {
    let Some(roster) = roster else {
        return TeamView::empty();
    };

    let names: Vec<String> = roster.occupied().map(|(_, name)| name.to_string()).collect();
    let index = match catalog.find_players(&names).await {
        Ok(players) => PlayerIndex::new(players),
        Err(e) => {
            warn!(user_id = %redact_sub(&roster.user_id), error = %e, "catalog unavailable; scoring as zero");
            PlayerIndex::default()
        }
    };

    TeamView {
        slots: slot_scores(&roster, &index),
        total: total_score(&roster, &index),
        roster: Some(roster),
    }
}

pub async fn team_view(
    catalog: &dyn PlayerCatalog,
    store: &dyn RosterStore,
    user_id: &str,
) -> Result<TeamView, DomainError> {
    let roster = store.get_roster(user_id).await?;
    Ok(score_roster(catalog, roster).await)
}

/// Positions `player` may be assigned to on the caller's roster.
pub async fn eligible_positions(
    store: &dyn RosterStore,
    user_id: &str,
    player: &str,
) -> Result<Vec<Position>, DomainError> {
    validate_player_name(player)?;
    let roster = store.get_roster(user_id).await?;
    Ok(domain::eligible_positions(roster.as_ref(), player))
}

/// Place `player` at `position`, creating the roster on first use.
pub async fn assign_player(
    store: &dyn RosterStore,
    user_id: &str,
    player: &str,
    position: Position,
    now: OffsetDateTime,
) -> Result<Roster, DomainError> {
    validate_player_name(player)?;
    let current = store
        .get_roster(user_id)
        .await?
        .unwrap_or_else(|| Roster::empty(user_id, now));

    let next = domain::assign(&current, player, position, now).inspect_err(|e| {
        debug!(position = %position, error = %e, "assignment rejected");
    })?;

    let stored = store.put_roster(&next).await?;
    info!(position = %position, "player assigned");
    Ok(stored)
}

/// Clear `slot`. Without a stored roster there is nothing to clear and
/// nothing is written.
pub async fn remove_slot(
    store: &dyn RosterStore,
    user_id: &str,
    slot: Slot,
    now: OffsetDateTime,
) -> Result<Option<Roster>, DomainError> {
    let Some(current) = store.get_roster(user_id).await? else {
        debug!(slot = %slot, "remove on absent roster ignored");
        return Ok(None);
    };

    let next = domain::remove(&current, slot, now);
    let stored = store.put_roster(&next).await?;
    info!(slot = %slot, "slot cleared");
    Ok(Some(stored))
}
