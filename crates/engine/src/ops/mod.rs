use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::ResultEngine;
use crate::fanout::{FanoutSource, Uniform};

mod mill;
mod report;
mod select;
mod trade;

pub use report::{Inventory, Records, Summary};
pub use select::StageSelector;

/// The stage transition engine.
///
/// Owns the database connection and the blank fan-out source. Every mutating
/// operation runs inside one database transaction, so a failed transition
/// never leaves partial state (the store rolls back on drop).
pub struct Engine {
    database: DatabaseConnection,
    fanout: Mutex<Box<dyn FanoutSource>>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
    fanout: Option<Box<dyn FanoutSource>>,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Override the blank fan-out source (tests pass a scripted sequence).
    pub fn fanout(mut self, source: Box<dyn FanoutSource>) -> EngineBuilder {
        self.fanout = Some(source);
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
            fanout: Mutex::new(
                self.fanout
                    .unwrap_or_else(|| Box::new(Uniform::from_entropy())),
            ),
        })
    }
}
