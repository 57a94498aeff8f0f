use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::rfc3339;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::{Position, Roster, Slot, SlotScore};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::extractors::current_user::CurrentUser;
use crate::extractors::ValidatedJson;
use crate::repos::{SeaPlayerCatalog, SeaRosterStore};
use crate::services::team::{self, TeamView};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct RosterResponse {
    pub captain: Option<String>,
    pub handler_1: Option<String>,
    pub handler_2: Option<String>,
    pub cutter_1: Option<String>,
    pub cutter_2: Option<String>,
    pub defender_1: Option<String>,
    pub defender_2: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Roster> for RosterResponse {
    fn from(r: Roster) -> Self {
        Self {
            captain: r.captain,
            handler_1: r.handler_1,
            handler_2: r.handler_2,
            cutter_1: r.cutter_1,
            cutter_2: r.cutter_2,
            defender_1: r.defender_1,
            defender_2: r.defender_2,
            created_at: rfc3339(r.created_at),
            updated_at: rfc3339(r.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub user_id: String,
    pub roster: Option<RosterResponse>,
    pub slots: Vec<SlotScore>,
    pub total: f64,
    /// `total` with two decimals, as shown on the team page
    pub total_display: String,
}

impl TeamResponse {
    fn new(user_id: String, view: TeamView) -> Self {
        Self {
            user_id,
            roster: view.roster.map(RosterResponse::from),
            slots: view.slots,
            total_display: format!("{:.2}", view.total),
            total: view.total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AssignPlayerRequest {
    pub player: String,
    /// Parsed by hand so an unknown position is INVALID_POSITION, not a
    /// generic body error
    pub position: String,
}

fn parse_slot_index(raw: &str) -> Result<u8, DomainError> {
    raw.parse::<u8>().map_err(|_| {
        DomainError::validation(
            ValidationKind::InvalidSlot,
            format!("Slot index '{raw}' must be 1 or 2"),
        )
    })
}

async fn get_team(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let view = team::team_view(
        &SeaPlayerCatalog::new(db),
        &SeaRosterStore::new(db),
        &current_user.user_id,
    )
    .await?;
    Ok(HttpResponse::Ok().json(TeamResponse::new(current_user.user_id, view)))
}

async fn assign_player(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    body: ValidatedJson<AssignPlayerRequest>,
) -> Result<HttpResponse, AppError> {
    let AssignPlayerRequest { player, position } = body.into_inner();
    let position: Position = position.parse()?;
    let user_id = current_user.user_id.clone();
    let now = OffsetDateTime::now_utc();

    let roster = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let store = SeaRosterStore::new(txn);
            team::assign_player(&store, &user_id, &player, position, now)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    // Scored after commit, on the pool
    let catalog = SeaPlayerCatalog::new(require_db(&app_state)?);
    let view = team::score_roster(&catalog, Some(roster)).await;
    Ok(HttpResponse::Ok().json(TeamResponse::new(current_user.user_id, view)))
}

async fn clear_slot(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
    position: &str,
    index: Option<&str>,
) -> Result<HttpResponse, AppError> {
    let position: Position = position.parse()?;
    let slot = if position == Position::Captain {
        // Single slot; any index segment is ignored
        Slot::Captain
    } else {
        Slot::resolve(position, index.map(parse_slot_index).transpose()?)?
    };
    let user_id = current_user.user_id.clone();
    let now = OffsetDateTime::now_utc();

    let roster = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            let store = SeaRosterStore::new(txn);
            team::remove_slot(&store, &user_id, slot, now)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    let catalog = SeaPlayerCatalog::new(require_db(&app_state)?);
    let view = team::score_roster(&catalog, roster).await;
    Ok(HttpResponse::Ok().json(TeamResponse::new(current_user.user_id, view)))
}

async fn remove_single_slot(
    path: web::Path<String>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    clear_slot(current_user, app_state, &path, None).await
}

async fn remove_indexed_slot(
    path: web::Path<(String, String)>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (position, index) = path.into_inner();
    clear_slot(current_user, app_state, &position, Some(&index)).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/team", web::get().to(get_team))
        .route("/team/players", web::post().to(assign_player))
        .route(
            "/team/slots/{position}",
            web::delete().to(remove_single_slot),
        )
        .route(
            "/team/slots/{position}/{slot}",
            web::delete().to(remove_indexed_slot),
        );
}
