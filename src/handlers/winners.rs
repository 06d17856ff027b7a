use axum::{
    extract::{Path, State},
    Json,
};

use crate::dtos::{MessageResponse, RaceWinner, RaceWinnerResponse, YearWinnersResponse};
use crate::error::AppError;
use crate::AppState;

/// Welcome message.
#[utoipa::path(
    get,
    path = "/",
    operation_id = "root",
    responses(
        (status = 200, description = "Welcome message", body = MessageResponse)
    )
)]
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the F1 Race Winners API! Docs at /docs.".to_string(),
    })
}

/// Get the winners of all Formula 1 races in a given year.
#[utoipa::path(
    get,
    path = "/winners/{year}",
    operation_id = "getYearWinners",
    params(
        ("year" = i32, Path, description = "The year of the F1 season")
    ),
    responses(
        (status = 200, description = "Winners recorded for the year", body = YearWinnersResponse),
        (status = 404, description = "Object not found", body = MessageResponse)
    ),
    tag = "F1"
)]
pub async fn year_winners(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<YearWinnersResponse>, AppError> {
    let winners = state
        .dataset
        .year_winners(year)?
        .iter()
        .map(RaceWinner::from)
        .collect();

    Ok(Json(YearWinnersResponse { year, winners }))
}

/// Get the winner of a specific Formula 1 race in a given year.
///
/// The race segment matches case-insensitively after trimming; the response
/// echoes the segment exactly as the caller sent it.
#[utoipa::path(
    get,
    path = "/winners/{year}/{race}",
    operation_id = "getRaceWinner",
    params(
        ("year" = i32, Path, description = "The year of the F1 season"),
        ("race" = String, Path, description = "Race name, matched case-insensitively")
    ),
    responses(
        (status = 200, description = "Winner of the requested race", body = RaceWinnerResponse),
        (status = 404, description = "Object not found", body = MessageResponse)
    ),
    tag = "F1"
)]
pub async fn race_winner(
    State(state): State<AppState>,
    Path((year, race)): Path<(i32, String)>,
) -> Result<Json<RaceWinnerResponse>, AppError> {
    let record = state.dataset.race_winner(year, &race)?;
    let winner = record.winner.clone();

    Ok(Json(RaceWinnerResponse { year, race, winner }))
}
