//! DTOs for live_scores_sea adapter.

use time::OffsetDateTime;

/// DTO for seeding a catalog row (tooling and tests; the service never writes).
#[derive(Debug, Clone)]
pub struct LiveScoreCreate {
    pub player: String,
    pub team: String,
    pub tournament_name: String,
    pub price: f64,
    pub games_played: i32,
    pub assists: i32,
    pub goals: i32,
    pub ds: i32,
    pub turnovers: i32,
    pub captain_score: f64,
    pub handler_score: f64,
    pub cutter_score: f64,
    pub defender_score: f64,
    pub questionable: bool,
    pub tournaments: Option<String>,
    pub games: Option<String>,
    pub updated_at: OffsetDateTime,
}

impl LiveScoreCreate {
    pub fn new(player: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            team: team.into(),
            tournament_name: String::new(),
            price: 0.0,
            games_played: 0,
            assists: 0,
            goals: 0,
            ds: 0,
            turnovers: 0,
            captain_score: 0.0,
            handler_score: 0.0,
            cutter_score: 0.0,
            defender_score: 0.0,
            questionable: false,
            tournaments: None,
            games: None,
            updated_at: OffsetDateTime::now_utc(),
        }
    }

    /// Per-position scores in captain, handler, cutter, defender order.
    pub fn with_scores(mut self, scores: [f64; 4]) -> Self {
        let [captain, handler, cutter, defender] = scores;
        self.captain_score = captain;
        self.handler_score = handler;
        self.cutter_score = cutter;
        self.defender_score = defender;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_tournament(mut self, tournament_name: impl Into<String>) -> Self {
        self.tournament_name = tournament_name.into();
        self
    }

    pub fn questionable(mut self) -> Self {
        self.questionable = true;
        self
    }
}
