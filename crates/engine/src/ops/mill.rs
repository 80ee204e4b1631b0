//! Shop-floor transitions: cut, turn, finish.
use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::fanout::{MAX_BLANKS_PER_CUT, MIN_BLANKS_PER_CUT};
use crate::{EngineError, ResultEngine, Stage, bats, blanks, logs, turnings};

use super::{Engine, StageSelector, select};

/// Generates a one-to-one stage transition (turn, finish): resolve the parent,
/// reject a consumed one, mark it consumed and create the single child row,
/// all inside one transaction.
macro_rules! impl_one_to_one_stage {
    ($(#[$meta:meta])* $fn_name:ident, $select:ident, $parent:ident, $child:ident, $parent_fk:ident, $attr:ident, $stage:expr) => {
        $(#[$meta])*
        pub async fn $fn_name(&self, target: StageSelector, $attr: &str) -> ResultEngine<i32> {
            let tx = self.database.begin().await?;

            let parent = select::$select(&tx, target).await?;
            if parent.consumed {
                return Err(EngineError::AlreadyConsumed {
                    stage: $stage,
                    id: parent.id,
                });
            }

            $parent::ActiveModel {
                id: ActiveValue::Set(parent.id),
                consumed: ActiveValue::Set(true),
                ..Default::default()
            }
            .update(&tx)
            .await?;
            let child = $child::ActiveModel {
                $parent_fk: ActiveValue::Set(parent.id),
                $attr: ActiveValue::Set($attr.to_string()),
                consumed: ActiveValue::Set(false),
                ..Default::default()
            }
            .insert(&tx)
            .await?;

            tx.commit().await?;
            Ok(child.id)
        }
    };
}

impl Engine {
    /// Cut a log into blanks of the given length.
    ///
    /// The log is marked consumed and 2 to 5 blanks are created, a count drawn
    /// from the injected fan-out source. Returns the new blank ids.
    pub async fn cut_log(&self, target: StageSelector, length: f64) -> ResultEngine<Vec<i32>> {
        let tx = self.database.begin().await?;

        let log = select::log(&tx, target).await?;
        if log.consumed {
            return Err(EngineError::AlreadyConsumed {
                stage: Stage::Log,
                id: log.id,
            });
        }

        logs::ActiveModel {
            id: ActiveValue::Set(log.id),
            consumed: ActiveValue::Set(true),
            ..Default::default()
        }
        .update(&tx)
        .await?;

        let count = self
            .fanout
            .lock()
            .await
            .next_in_range(MIN_BLANKS_PER_CUT, MAX_BLANKS_PER_CUT);
        let mut blank_ids = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let blank = blanks::ActiveModel {
                log_id: ActiveValue::Set(log.id),
                length: ActiveValue::Set(length),
                consumed: ActiveValue::Set(false),
                ..Default::default()
            }
            .insert(&tx)
            .await?;
            blank_ids.push(blank.id);
        }

        tx.commit().await?;
        Ok(blank_ids)
    }

    impl_one_to_one_stage!(
        /// Turn a blank on the lathe into a league's profile.
        turn_blank,
        blank,
        blanks,
        turnings,
        blank_id,
        league,
        Stage::Blank
    );

    impl_one_to_one_stage!(
        /// Finish a turning into a named bat model.
        finish_turning,
        turning,
        turnings,
        bats,
        turning_id,
        model,
        Stage::Turning
    );
}
