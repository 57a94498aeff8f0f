pub mod live_scores;
pub mod user_teams;

pub use live_scores::Entity as LiveScores;
pub use live_scores::Model as LiveScore;
pub use user_teams::Entity as UserTeams;
pub use user_teams::Model as UserTeam;
