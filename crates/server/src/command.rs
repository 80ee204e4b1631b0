//! The generic command endpoint.
//!
//! One POST body names the operation instead of the URI. Matching is
//! case-insensitive and ignores internal whitespace; beyond the command name
//! nothing is validated and absent fields keep their defaults. Items are
//! always selected oldest-unconsumed.

use api_types::{command::Command, status::StatusSummary};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use engine::StageSelector;

use crate::{ServerError, server::ServerState, status::summary_packet};

pub async fn dispatch(
    State(state): State<ServerState>,
    payload: Result<Json<Command>, JsonRejection>,
) -> Result<Json<StatusSummary>, ServerError> {
    let Json(cmd) = payload.map_err(|err| ServerError::Generic(err.body_text()))?;

    let name: String = cmd.command.split_whitespace().collect::<String>().to_lowercase();
    match name.as_str() {
        "summary" => {}
        "buy" => {
            state.engine.buy_log(&cmd.species).await?;
        }
        "cut" => {
            state.engine.cut_log(StageSelector::Oldest, cmd.length).await?;
        }
        "turn" => {
            state
                .engine
                .turn_blank(StageSelector::Oldest, &cmd.league)
                .await?;
        }
        "finish" => {
            state
                .engine
                .finish_turning(StageSelector::Oldest, &cmd.model)
                .await?;
        }
        "sell" => {
            state.engine.sell_bat(StageSelector::Oldest).await?;
        }
        _ => return Err(ServerError::Generic("unrecognized command".to_string())),
    }

    Ok(Json(summary_packet(&state.engine, String::new()).await?))
}
