//! DTOs for user_teams_sea adapter.

use time::OffsetDateTime;

/// Full-record write for a user's team; every slot is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTeamUpsert {
    pub user_id: String,
    pub captain: Option<String>,
    pub handler_1: Option<String>,
    pub handler_2: Option<String>,
    pub cutter_1: Option<String>,
    pub cutter_2: Option<String>,
    pub defender_1: Option<String>,
    pub defender_2: Option<String>,
    /// Only used when the row is created
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
