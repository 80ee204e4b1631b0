pub use error::{EngineError, Stage};
pub use fanout::{FanoutSource, MAX_BLANKS_PER_CUT, MIN_BLANKS_PER_CUT, Scripted, Uniform};
pub use ops::{Engine, EngineBuilder, Inventory, Records, StageSelector, Summary};

pub mod bats;
pub mod blanks;
mod error;
pub mod fanout;
pub mod ledger;
pub mod logs;
mod ops;
pub mod turnings;

type ResultEngine<T> = Result<T, EngineError>;
