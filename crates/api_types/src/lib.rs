use serde::{Deserialize, Serialize};

pub mod status {
    use super::*;

    /// The standard success body: cash formatted to two decimals, per-stage
    /// counts of unconsumed items as strings, and an optional note.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct StatusSummary {
        pub cash: String,
        pub logs: String,
        pub blanks: String,
        pub turnings: String,
        pub bats: String,
        /// Human-readable note; empty string if none.
        pub message: String,
    }
}

pub mod inventory {
    use super::*;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct LogItem {
        pub id: i32,
        pub species: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct BlankItem {
        pub id: i32,
        pub length: f64,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct TurningItem {
        pub id: i32,
        pub league: String,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct BatItem {
        pub id: i32,
        pub model: String,
    }

    /// Same shape as [`super::status::StatusSummary`] but with the unconsumed
    /// rows themselves, ordered by id ascending, instead of counts.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct InventoryListing {
        pub cash: String,
        pub logs: Vec<LogItem>,
        pub blanks: Vec<BlankItem>,
        pub turnings: Vec<TurningItem>,
        pub bats: Vec<BatItem>,
        pub message: String,
    }
}

pub mod command {
    use super::*;

    /// Body of the generic `/command` endpoint.
    ///
    /// Only the command name is validated; the attribute fields are trusted
    /// as sent and simply default when absent. Item selection is always
    /// oldest-unconsumed.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct Command {
        pub command: String,
        #[serde(default)]
        pub species: String,
        #[serde(default)]
        pub length: f64,
        #[serde(default)]
        pub league: String,
        #[serde(default)]
        pub model: String,
    }
}
