//! SeaORM adapters. Functions here return `DbErr`; repos map to `DomainError`.

pub mod live_scores_sea;
pub mod user_teams_sea;
