//! Resource-oriented transition endpoints.
//!
//! The item segment is either an integer id or the literal `oldest`
//! (case-insensitive), which selects the not-yet-consumed item with the
//! smallest id.

use api_types::status::StatusSummary;
use axum::{
    Json,
    extract::{Path, State},
};
use engine::StageSelector;

use crate::{ServerError, server::ServerState, status::summary_packet};

fn parse_selector(raw: &str) -> Result<StageSelector, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::Generic(format!("invalid item id: {raw}")))
}

pub async fn buy(
    State(state): State<ServerState>,
    Path(species): Path<String>,
) -> Result<Json<StatusSummary>, ServerError> {
    state.engine.buy_log(&species).await?;
    Ok(Json(summary_packet(&state.engine, String::new()).await?))
}

pub async fn cut(
    State(state): State<ServerState>,
    Path((target, length)): Path<(String, f64)>,
) -> Result<Json<StatusSummary>, ServerError> {
    let selector = parse_selector(&target)?;
    state.engine.cut_log(selector, length).await?;
    Ok(Json(summary_packet(&state.engine, String::new()).await?))
}

pub async fn turn(
    State(state): State<ServerState>,
    Path((target, league)): Path<(String, String)>,
) -> Result<Json<StatusSummary>, ServerError> {
    let selector = parse_selector(&target)?;
    state.engine.turn_blank(selector, &league).await?;
    Ok(Json(summary_packet(&state.engine, String::new()).await?))
}

pub async fn finish(
    State(state): State<ServerState>,
    Path((target, model)): Path<(String, String)>,
) -> Result<Json<StatusSummary>, ServerError> {
    let selector = parse_selector(&target)?;
    state.engine.finish_turning(selector, &model).await?;
    Ok(Json(summary_packet(&state.engine, String::new()).await?))
}

pub async fn sell(
    State(state): State<ServerState>,
    Path(target): Path<String>,
) -> Result<Json<StatusSummary>, ServerError> {
    let selector = parse_selector(&target)?;
    state.engine.sell_bat(selector).await?;
    Ok(Json(summary_packet(&state.engine, String::new()).await?))
}
