//! Read-only reporting: summary counts, unconsumed inventory and the full
//! audit record. Each view is computed inside its own transaction so the five
//! tables and the ledger are seen as one consistent snapshot.
use sea_orm::{PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{ResultEngine, bats, blanks, ledger, logs, turnings};

use super::Engine;

/// Cash balance plus per-stage counts of unconsumed items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub cash: f64,
    pub logs: u64,
    pub blanks: u64,
    pub turnings: u64,
    pub bats: u64,
}

/// Cash balance plus the unconsumed rows of every stage, ordered by id.
#[derive(Clone, Debug)]
pub struct Inventory {
    pub cash: f64,
    pub logs: Vec<logs::Model>,
    pub blanks: Vec<blanks::Model>,
    pub turnings: Vec<turnings::Model>,
    pub bats: Vec<bats::Model>,
}

/// Every row of every table, consumed items included, ordered by id.
#[derive(Clone, Debug)]
pub struct Records {
    pub ledger: Vec<ledger::Model>,
    pub logs: Vec<logs::Model>,
    pub blanks: Vec<blanks::Model>,
    pub turnings: Vec<turnings::Model>,
    pub bats: Vec<bats::Model>,
}

impl Engine {
    /// Current cash balance.
    pub async fn balance(&self) -> ResultEngine<f64> {
        let tx = self.database.begin().await?;
        let cash = ledger::balance_with(&tx).await?;
        tx.commit().await?;
        Ok(cash)
    }

    /// Counts of currently-unconsumed items plus the cash balance.
    pub async fn summary(&self) -> ResultEngine<Summary> {
        let tx = self.database.begin().await?;

        let cash = ledger::balance_with(&tx).await?;
        let logs = logs::Entity::find()
            .filter(logs::Column::Consumed.eq(false))
            .count(&tx)
            .await?;
        let blanks = blanks::Entity::find()
            .filter(blanks::Column::Consumed.eq(false))
            .count(&tx)
            .await?;
        let turnings = turnings::Entity::find()
            .filter(turnings::Column::Consumed.eq(false))
            .count(&tx)
            .await?;
        let bats = bats::Entity::find()
            .filter(bats::Column::Consumed.eq(false))
            .count(&tx)
            .await?;

        tx.commit().await?;
        Ok(Summary {
            cash,
            logs,
            blanks,
            turnings,
            bats,
        })
    }

    /// Unconsumed items of every stage with their attributes, oldest first.
    pub async fn inventory(&self) -> ResultEngine<Inventory> {
        let tx = self.database.begin().await?;

        let cash = ledger::balance_with(&tx).await?;
        let logs = logs::Entity::find()
            .filter(logs::Column::Consumed.eq(false))
            .order_by_asc(logs::Column::Id)
            .all(&tx)
            .await?;
        let blanks = blanks::Entity::find()
            .filter(blanks::Column::Consumed.eq(false))
            .order_by_asc(blanks::Column::Id)
            .all(&tx)
            .await?;
        let turnings = turnings::Entity::find()
            .filter(turnings::Column::Consumed.eq(false))
            .order_by_asc(turnings::Column::Id)
            .all(&tx)
            .await?;
        let bats = bats::Entity::find()
            .filter(bats::Column::Consumed.eq(false))
            .order_by_asc(bats::Column::Id)
            .all(&tx)
            .await?;

        tx.commit().await?;
        Ok(Inventory {
            cash,
            logs,
            blanks,
            turnings,
            bats,
        })
    }

    /// The full audit trail: every ledger entry and every item ever created,
    /// whether consumed or not.
    pub async fn records(&self) -> ResultEngine<Records> {
        let tx = self.database.begin().await?;

        let ledger = ledger::Entity::find()
            .order_by_asc(ledger::Column::Id)
            .all(&tx)
            .await?;
        let logs = logs::Entity::find()
            .order_by_asc(logs::Column::Id)
            .all(&tx)
            .await?;
        let blanks = blanks::Entity::find()
            .order_by_asc(blanks::Column::Id)
            .all(&tx)
            .await?;
        let turnings = turnings::Entity::find()
            .order_by_asc(turnings::Column::Id)
            .all(&tx)
            .await?;
        let bats = bats::Entity::find()
            .order_by_asc(bats::Column::Id)
            .all(&tx)
            .await?;

        tx.commit().await?;
        Ok(Records {
            ledger,
            logs,
            blanks,
            turnings,
            bats,
        })
    }
}
