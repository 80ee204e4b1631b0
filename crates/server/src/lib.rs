use axum::http::StatusCode;
use axum::response::IntoResponse;
use engine::EngineError;

pub use server::{ServerState, router, run, run_with_listener, spawn_with_listener};

mod actions;
mod command;
mod pages;
mod server;
mod status;

pub mod types {
    pub use api_types::command::Command;
    pub use api_types::inventory::{BatItem, BlankItem, InventoryListing, LogItem, TurningItem};
    pub use api_types::status::StatusSummary;
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::NotFound { .. } | EngineError::NoneAvailable { .. } => StatusCode::NOT_FOUND,
        EngineError::AlreadyConsumed { .. } => StatusCode::CONFLICT,
        EngineError::InsufficientFunds { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, message).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Stage;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::NotFound {
            stage: Stage::Log,
            id: 42,
        })
        .into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_none_available_maps_to_404() {
        let res = ServerError::from(EngineError::NoneAvailable { stage: Stage::Bat }).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_already_consumed_maps_to_409() {
        let res = ServerError::from(EngineError::AlreadyConsumed {
            stage: Stage::Blank,
            id: 1,
        })
        .into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn engine_insufficient_funds_maps_to_422() {
        let res = ServerError::from(EngineError::InsufficientFunds {
            cost: 20.0,
            available: 0.0,
        })
        .into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
