//! Read-only JSON endpoints and the shared success packet.

use api_types::inventory::{BatItem, BlankItem, InventoryListing, LogItem, TurningItem};
use api_types::status::StatusSummary;
use axum::{Json, extract::State};
use engine::Engine;

use crate::{ServerError, server::ServerState};

/// The body every successful transition responds with: a fresh summary
/// snapshot, plus an optional note.
pub(crate) async fn summary_packet(
    engine: &Engine,
    message: String,
) -> Result<StatusSummary, ServerError> {
    let summary = engine.summary().await?;
    Ok(StatusSummary {
        cash: format!("${:.2}", summary.cash),
        logs: summary.logs.to_string(),
        blanks: summary.blanks.to_string(),
        turnings: summary.turnings.to_string(),
        bats: summary.bats.to_string(),
        message,
    })
}

pub async fn summary_json(
    State(state): State<ServerState>,
) -> Result<Json<StatusSummary>, ServerError> {
    Ok(Json(summary_packet(&state.engine, String::new()).await?))
}

pub async fn inventory_json(
    State(state): State<ServerState>,
) -> Result<Json<InventoryListing>, ServerError> {
    let inventory = state.engine.inventory().await?;
    Ok(Json(InventoryListing {
        cash: format!("${:.2}", inventory.cash),
        logs: inventory
            .logs
            .into_iter()
            .map(|log| LogItem {
                id: log.id,
                species: log.species,
            })
            .collect(),
        blanks: inventory
            .blanks
            .into_iter()
            .map(|blank| BlankItem {
                id: blank.id,
                length: blank.length,
            })
            .collect(),
        turnings: inventory
            .turnings
            .into_iter()
            .map(|turning| TurningItem {
                id: turning.id,
                league: turning.league,
            })
            .collect(),
        bats: inventory
            .bats
            .into_iter()
            .map(|bat| BatItem {
                id: bat.id,
                model: bat.model,
            })
            .collect(),
        message: String::new(),
    }))
}
