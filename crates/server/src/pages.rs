//! Human-browsable record pages and the web control form.
//!
//! These render the full audit trail (consumed rows included), one line per
//! row, with parent attributes resolved through id maps rather than any live
//! object graph. The page title carries the configured display version.

use std::collections::HashMap;

use axum::{
    extract::State,
    response::{Html, Redirect},
};
use engine::{Records, StageSelector};
use serde::Deserialize;

use crate::{ServerError, server::ServerState, status::summary_packet};

pub async fn root() -> Redirect {
    Redirect::to("/webform")
}

pub async fn logs(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let records = state.engine.records().await?;
    Ok(Html(render_list(
        &state.version,
        "Log Record",
        &log_lines(&records),
    )))
}

pub async fn blanks(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let records = state.engine.records().await?;
    Ok(Html(render_list(
        &state.version,
        "Blanks Record",
        &blank_lines(&records),
    )))
}

pub async fn turnings(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let records = state.engine.records().await?;
    Ok(Html(render_list(
        &state.version,
        "Turnings Record",
        &turning_lines(&records),
    )))
}

pub async fn bats(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let records = state.engine.records().await?;
    Ok(Html(render_list(
        &state.version,
        "Bats now in stock",
        &bat_lines(&records),
    )))
}

pub async fn cash_transactions(
    State(state): State<ServerState>,
) -> Result<Html<String>, ServerError> {
    let records = state.engine.records().await?;
    Ok(Html(render_list(
        &state.version,
        "Cash Transactions",
        &ledger_lines(&records),
    )))
}

pub async fn cash_balance(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let balance = state.engine.balance().await?;
    let body = format!("    <h3>Cash balance: ${balance:.2}</h3>\n");
    Ok(Html(render_page(&state.version, &body)))
}

/// The general ledger: every table on one page.
pub async fn ledger(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    let records = state.engine.records().await?;
    let mut body = String::new();
    for (head, lines) in [
        ("Cash Transactions", ledger_lines(&records)),
        ("Log Record", log_lines(&records)),
        ("Blanks Record", blank_lines(&records)),
        ("Turnings Record", turning_lines(&records)),
        ("Bats now in stock", bat_lines(&records)),
    ] {
        body.push_str(&render_section(head, &lines));
    }
    Ok(Html(render_page(&state.version, &body)))
}

pub async fn webform(State(state): State<ServerState>) -> Result<Html<String>, ServerError> {
    render_webform(&state).await
}

#[derive(Debug, Deserialize)]
pub struct FormAction {
    pub button_name: String,
}

/// Acts on the control-form buttons. Items are taken in fifo order only, with
/// fixed demo attributes; the JSON API is the surface for anything richer.
pub async fn form_result(
    State(state): State<ServerState>,
    axum::Form(action): axum::Form<FormAction>,
) -> Result<Html<String>, ServerError> {
    match action.button_name.to_lowercase().as_str() {
        "buy" => {
            state.engine.buy_log("Ash").await?;
        }
        "cut" => {
            state.engine.cut_log(StageSelector::Oldest, 38.0).await?;
        }
        "turn" => {
            state.engine.turn_blank(StageSelector::Oldest, "AL").await?;
        }
        "finish" => {
            state
                .engine
                .finish_turning(StageSelector::Oldest, "Cobb")
                .await?;
        }
        "sell" => {
            state.engine.sell_bat(StageSelector::Oldest).await?;
        }
        "update screen" => {}
        _ => return Err(ServerError::Generic("unrecognized operation".to_string())),
    }

    render_webform(&state).await
}

async fn render_webform(state: &ServerState) -> Result<Html<String>, ServerError> {
    let packet = summary_packet(&state.engine, String::new()).await?;
    let json = serde_json::to_string_pretty(&packet)
        .map_err(|err| ServerError::Generic(err.to_string()))?;

    let mut body = String::from("    <h1>Bat Factory Control</h1>\n");
    body.push_str("    <form action=\"/form_result\" method=\"post\">\n");
    for button in ["Buy", "Cut", "Turn", "Finish", "Sell", "Update Screen"] {
        body.push_str(&format!(
            "      <button type=\"submit\" name=\"button_name\" value=\"{button}\">{button}</button>\n"
        ));
    }
    body.push_str("    </form>\n");
    body.push_str(&format!("    <pre>{}</pre>\n", escape(&json)));

    Ok(Html(render_page(&state.version, &body)))
}

// ─── line builders ───────────────────────────────────────────────────────────

fn ledger_lines(records: &Records) -> Vec<String> {
    records
        .ledger
        .iter()
        .map(|entry| {
            format!(
                "{} = {} (Positive is cash receipt, negative is disbursement)",
                entry.id, entry.dollars
            )
        })
        .collect()
}

fn log_lines(records: &Records) -> Vec<String> {
    records
        .logs
        .iter()
        .map(|log| format!("{} = {}, consumed = {}", log.id, log.species, log.consumed))
        .collect()
}

fn blank_lines(records: &Records) -> Vec<String> {
    let species_of = species_by_log(records);
    records
        .blanks
        .iter()
        .map(|blank| {
            format!(
                "{} = {}, {}, consumed = {}",
                blank.id,
                species_of.get(&blank.log_id).copied().unwrap_or("?"),
                blank.length,
                blank.consumed
            )
        })
        .collect()
}

fn turning_lines(records: &Records) -> Vec<String> {
    let species_of = species_by_log(records);
    let blank_of = blanks_by_id(records);
    records
        .turnings
        .iter()
        .map(|turning| {
            let blank = blank_of.get(&turning.blank_id);
            format!(
                "{} = {}, {}, {}, consumed = {}",
                turning.id,
                blank
                    .and_then(|b| species_of.get(&b.log_id).copied())
                    .unwrap_or("?"),
                blank.map_or_else(|| "?".to_string(), |b| b.length.to_string()),
                turning.league,
                turning.consumed
            )
        })
        .collect()
}

fn bat_lines(records: &Records) -> Vec<String> {
    let species_of = species_by_log(records);
    let blank_of = blanks_by_id(records);
    let turning_of: HashMap<i32, &engine::turnings::Model> = records
        .turnings
        .iter()
        .map(|turning| (turning.id, turning))
        .collect();
    records
        .bats
        .iter()
        .map(|bat| {
            let turning = turning_of.get(&bat.turning_id);
            let blank = turning.and_then(|t| blank_of.get(&t.blank_id));
            format!(
                "{} = {}, {}, {}, {}, consumed = {}",
                bat.id,
                blank
                    .and_then(|b| species_of.get(&b.log_id).copied())
                    .unwrap_or("?"),
                blank.map_or_else(|| "?".to_string(), |b| b.length.to_string()),
                turning.map_or("?", |t| t.league.as_str()),
                bat.model,
                bat.consumed
            )
        })
        .collect()
}

fn species_by_log(records: &Records) -> HashMap<i32, &str> {
    records
        .logs
        .iter()
        .map(|log| (log.id, log.species.as_str()))
        .collect()
}

fn blanks_by_id(records: &Records) -> HashMap<i32, &engine::blanks::Model> {
    records
        .blanks
        .iter()
        .map(|blank| (blank.id, blank))
        .collect()
}

// ─── rendering ───────────────────────────────────────────────────────────────

fn render_list(version: &str, head: &str, lines: &[String]) -> String {
    render_page(version, &render_section(head, lines))
}

fn render_section(head: &str, lines: &[String]) -> String {
    let mut section = format!("    <h1>{}</h1>\n    <h3>Start of List</h3>\n", escape(head));
    section.push_str("    <table><tbody>\n");
    for line in lines {
        section.push_str(&format!("      <tr><td>{}</td></tr>\n", escape(line)));
    }
    section.push_str("    </tbody></table>\n    <h3>End of list</h3>\n");
    section
}

fn render_page(version: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n  <head><title>{}</title></head>\n  <body>\n{}  </body>\n</html>\n",
        escape(version),
        body
    )
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
