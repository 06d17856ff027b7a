//! Wire types for the race winners API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dataset::WinnerRecord;

/// Plain message payload. Serves as the welcome response and as the body of
/// every 404.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Data not available for the requested year.")]
    pub message: String,
}

/// The winner of a race.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RaceWinner {
    #[schema(example = "bahrain")]
    pub race: String,
    #[schema(example = "Lewis Hamilton")]
    pub winner: String,
}

impl From<&WinnerRecord> for RaceWinner {
    fn from(record: &WinnerRecord) -> Self {
        Self {
            race: record.race.clone(),
            winner: record.winner.clone(),
        }
    }
}

/// All race winners recorded for one season, in authored order.
#[derive(Debug, Serialize, ToSchema)]
pub struct YearWinnersResponse {
    #[schema(example = 2021)]
    pub year: i32,
    pub winners: Vec<RaceWinner>,
}

/// Winner of a single race in a season.
///
/// `race` echoes the caller's path segment exactly as sent, not the stored
/// identifier it matched.
#[derive(Debug, Serialize, ToSchema)]
pub struct RaceWinnerResponse {
    #[schema(example = 2021)]
    pub year: i32,
    #[schema(example = "bahrain")]
    pub race: String,
    #[schema(example = "Lewis Hamilton")]
    pub winner: String,
}
