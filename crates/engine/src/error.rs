//! The module contains the errors the engine can throw.
//!
//! Every failure is local to a single operation: nothing is retried and no
//! partial state is ever left behind, since each operation runs inside one
//! database transaction.
use sea_orm::DbErr;
use thiserror::Error;

/// A pipeline position an inventory item occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Log,
    Blank,
    Turning,
    Bat,
}

impl Stage {
    /// The item name used in messages.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Blank => "blank",
            Self::Turning => "turning",
            Self::Bat => "bat",
        }
    }

    /// The operation that consumes an item of this stage.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Log => "cut",
            Self::Blank => "turn",
            Self::Turning => "finish",
            Self::Bat => "sell",
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Self::Log => "cut",
            Self::Blank => "turned",
            Self::Turning => "finished",
            Self::Bat => "sold",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("attempt to buy a log (cost = ${cost:.2}) when cash available = ${available:.2}")]
    InsufficientFunds { cost: f64, available: f64 },
    #[error("attempt to {} a {} (id = {id}) which has already been {}", stage.verb(), stage.noun(), stage.past_tense())]
    AlreadyConsumed { stage: Stage, id: i32 },
    #[error("no {} with id = {id}", stage.noun())]
    NotFound { stage: Stage, id: i32 },
    #[error("request to {} a {} when none are available", stage.verb(), stage.noun())]
    NoneAvailable { stage: Stage },
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::InsufficientFunds { cost, available },
                Self::InsufficientFunds { cost: c, available: a },
            ) => cost == c && available == a,
            (
                Self::AlreadyConsumed { stage, id },
                Self::AlreadyConsumed { stage: s, id: i },
            ) => stage == s && id == i,
            (Self::NotFound { stage, id }, Self::NotFound { stage: s, id: i }) => {
                stage == s && id == i
            }
            (Self::NoneAvailable { stage }, Self::NoneAvailable { stage: s }) => stage == s,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
