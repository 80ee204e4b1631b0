use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use engine::Engine;

use crate::{actions, command, pages, status};

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    /// Display version shown in page titles; comes from configuration.
    pub version: String,
}

/// Build the application router. Public so integration tests can drive it
/// without a listener.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(pages::root))
        .route("/logs", get(pages::logs))
        .route("/blanks", get(pages::blanks))
        .route("/turnings", get(pages::turnings))
        .route("/bats", get(pages::bats))
        .route("/cash_transactions", get(pages::cash_transactions))
        .route("/cash_balance", get(pages::cash_balance))
        .route("/ledger", get(pages::ledger))
        .route("/webform", get(pages::webform))
        .route("/form_result", post(pages::form_result))
        .route("/buy/{species}", post(actions::buy))
        .route("/cut/{target}/{length}", post(actions::cut))
        .route("/turn/{target}/{league}", post(actions::turn))
        .route("/finish/{target}/{model}", post(actions::finish))
        .route("/sell/{target}", post(actions::sell))
        .route("/command", post(command::dispatch))
        .route("/summary/json", get(status::summary_json))
        .route("/inventory/json", get(status::inventory_json))
        .with_state(state)
}

pub async fn run(engine: Engine, version: String) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, version, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    version: String,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
        version,
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    version: String,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, version, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
