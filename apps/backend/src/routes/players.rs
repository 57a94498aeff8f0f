use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::rfc3339;
use crate::db::require_db;
use crate::domain::{Player, Position};
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::repos::{SeaPlayerCatalog, SeaRosterStore};
use crate::services::{players, team};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct PositionScores {
    pub captain: f64,
    pub handler: f64,
    pub cutter: f64,
    pub defender: f64,
}

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub name: String,
    pub team: String,
    pub tournament_name: String,
    pub price: f64,
    pub games_played: i32,
    pub assists: i32,
    pub goals: i32,
    pub ds: i32,
    pub turnovers: i32,
    pub scores: PositionScores,
    pub questionable: bool,
    pub tournaments: Option<String>,
    pub games: Option<String>,
    pub updated_at: String,
}

impl From<Player> for PlayerResponse {
    fn from(p: Player) -> Self {
        Self {
            scores: PositionScores {
                captain: p.captain_score,
                handler: p.handler_score,
                cutter: p.cutter_score,
                defender: p.defender_score,
            },
            updated_at: rfc3339(p.updated_at),
            name: p.name,
            team: p.team,
            tournament_name: p.tournament_name,
            price: p.price,
            games_played: p.games_played,
            assists: p.assists,
            goals: p.goals,
            ds: p.ds,
            turnovers: p.turnovers,
            questionable: p.questionable,
            tournaments: p.tournaments,
            games: p.games,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EligiblePositionsResponse {
    pub player: String,
    pub positions: Vec<Position>,
}

async fn list_players(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let catalog = SeaPlayerCatalog::new(require_db(&app_state)?);
    let players = players::list_players(&catalog).await?;
    let body: Vec<PlayerResponse> = players.into_iter().map(PlayerResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_player(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let catalog = SeaPlayerCatalog::new(require_db(&app_state)?);
    let player = players::get_player(&catalog, &path).await?;
    Ok(HttpResponse::Ok().json(PlayerResponse::from(player)))
}

/// Positions the named player could take on the caller's team. The player
/// does not have to be in the catalog.
async fn eligible_positions(
    path: web::Path<String>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player = path.into_inner();
    let store = SeaRosterStore::new(require_db(&app_state)?);
    let positions = team::eligible_positions(&store, &current_user.user_id, &player).await?;
    Ok(HttpResponse::Ok().json(EligiblePositionsResponse { player, positions }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/players", web::get().to(list_players))
        .route("/players/{name}", web::get().to(get_player))
        .route(
            "/players/{name}/positions",
            web::get().to(eligible_positions),
        );
}
