//! SeaORM adapter for user teams.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set};

use crate::entities::user_teams;

pub mod dto;

pub use dto::UserTeamUpsert;

pub async fn find_by_user_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: &str,
) -> Result<Option<user_teams::Model>, sea_orm::DbErr> {
    user_teams::Entity::find()
        .filter(user_teams::Column::UserId.eq(user_id))
        .one(conn)
        .await
}

/// Insert or overwrite the row for `dto.user_id`.
///
/// Last write wins; `created_at` is kept from the first insert.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserTeamUpsert,
) -> Result<user_teams::Model, sea_orm::DbErr> {
    let user_id = dto.user_id.clone();
    let active = user_teams::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        captain: Set(dto.captain),
        handler_1: Set(dto.handler_1),
        handler_2: Set(dto.handler_2),
        cutter_1: Set(dto.cutter_1),
        cutter_2: Set(dto.cutter_2),
        defender_1: Set(dto.defender_1),
        defender_2: Set(dto.defender_2),
        created_at: Set(dto.created_at),
        updated_at: Set(dto.updated_at),
    };

    user_teams::Entity::insert(active)
        .on_conflict(
            OnConflict::column(user_teams::Column::UserId)
                .update_columns([
                    user_teams::Column::Captain,
                    user_teams::Column::Handler1,
                    user_teams::Column::Handler2,
                    user_teams::Column::Cutter1,
                    user_teams::Column::Cutter2,
                    user_teams::Column::Defender1,
                    user_teams::Column::Defender2,
                    user_teams::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    find_by_user_id(conn, &user_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("user_teams row missing after upsert".into()))
}
