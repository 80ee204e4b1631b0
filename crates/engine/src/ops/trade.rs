//! Cash-facing operations: buying logs and selling bats.
use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{EngineError, ResultEngine, Stage, bats, ledger, logs};

use super::{Engine, StageSelector, select};

impl Engine {
    /// Buy one log of the given species.
    ///
    /// Gated on the ledger balance covering [`logs::COST`] at decision time;
    /// the balance check, the log row and the disbursement entry all live in
    /// the same transaction.
    pub async fn buy_log(&self, species: &str) -> ResultEngine<i32> {
        let tx = self.database.begin().await?;

        let available = ledger::balance_with(&tx).await?;
        if available < logs::COST {
            return Err(EngineError::InsufficientFunds {
                cost: logs::COST,
                available,
            });
        }

        let log = logs::ActiveModel {
            species: ActiveValue::Set(species.to_string()),
            consumed: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(&tx)
        .await?;
        ledger::ActiveModel {
            dollars: ActiveValue::Set(-logs::COST),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;
        Ok(log.id)
    }

    /// Sell a bat: mark it consumed and credit [`bats::PRICE`] to the ledger.
    pub async fn sell_bat(&self, target: StageSelector) -> ResultEngine<i32> {
        let tx = self.database.begin().await?;

        let bat = select::bat(&tx, target).await?;
        if bat.consumed {
            return Err(EngineError::AlreadyConsumed {
                stage: Stage::Bat,
                id: bat.id,
            });
        }

        bats::ActiveModel {
            id: ActiveValue::Set(bat.id),
            consumed: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(&tx)
        .await?;
        ledger::ActiveModel {
            dollars: ActiveValue::Set(bats::PRICE),
            ..Default::default()
        }
        .insert(&tx)
        .await?;

        tx.commit().await?;
        Ok(bat.id)
    }

    /// Append a signed entry to the cash ledger. Always succeeds; overdraft
    /// gating is the purchase path's job, not the ledger's.
    pub async fn record(&self, dollars: f64) -> ResultEngine<i32> {
        let entry = ledger::ActiveModel {
            dollars: ActiveValue::Set(dollars),
            ..Default::default()
        }
        .insert(&self.database)
        .await?;
        Ok(entry.id)
    }
}
