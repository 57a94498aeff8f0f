use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum LiveScores {
    Table,
    Id,
    TournamentName,
    Team,
    Player,
    Tournaments,
    Games,
    Assists,
    Goals,
    Ds,
    Turnovers,
    Price,
    GamesPlayed,
    CaptainScore,
    HandlerScore,
    CutterScore,
    DefenderScore,
    Questionable,
    UpdatedAt,
}

#[derive(Iden)]
enum UserTeams {
    Table,
    Id,
    UserId,
    Captain,
    #[iden = "handler_1"]
    Handler1,
    #[iden = "handler_2"]
    Handler2,
    #[iden = "cutter_1"]
    Cutter1,
    #[iden = "cutter_2"]
    Cutter2,
    #[iden = "defender_1"]
    Defender1,
    #[iden = "defender_2"]
    Defender2,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // live_scores: read-only catalog populated by the stats pipeline
        manager
            .create_table(
                Table::create()
                    .table(LiveScores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LiveScores::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(LiveScores::TournamentName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(LiveScores::Team).string().not_null())
                    .col(ColumnDef::new(LiveScores::Player).string().not_null())
                    .col(ColumnDef::new(LiveScores::Tournaments).text().null())
                    .col(ColumnDef::new(LiveScores::Games).text().null())
                    .col(
                        ColumnDef::new(LiveScores::Assists)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LiveScores::Goals)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LiveScores::Ds)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LiveScores::Turnovers)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LiveScores::Price)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(LiveScores::GamesPlayed)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(LiveScores::CaptainScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(LiveScores::HandlerScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(LiveScores::CutterScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(LiveScores::DefenderScore)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(LiveScores::Questionable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(LiveScores::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Catalog lookups are by player name
        manager
            .create_index(
                Index::create()
                    .name("ix_live_scores_player")
                    .table(LiveScores::Table)
                    .col(LiveScores::Player)
                    .to_owned(),
            )
            .await?;

        // user_teams: one roster per user
        manager
            .create_table(
                Table::create()
                    .table(UserTeams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserTeams::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(UserTeams::UserId).string().not_null())
                    .col(ColumnDef::new(UserTeams::Captain).string().null())
                    .col(ColumnDef::new(UserTeams::Handler1).string().null())
                    .col(ColumnDef::new(UserTeams::Handler2).string().null())
                    .col(ColumnDef::new(UserTeams::Cutter1).string().null())
                    .col(ColumnDef::new(UserTeams::Cutter2).string().null())
                    .col(ColumnDef::new(UserTeams::Defender1).string().null())
                    .col(ColumnDef::new(UserTeams::Defender2).string().null())
                    .col(
                        ColumnDef::new(UserTeams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserTeams::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_user_teams_user_id")
                    .table(UserTeams::Table)
                    .col(UserTeams::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ux_user_teams_user_id")
                    .table(UserTeams::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserTeams::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_live_scores_player")
                    .table(LiveScores::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LiveScores::Table).to_owned())
            .await?;

        Ok(())
    }
}
