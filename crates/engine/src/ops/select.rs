//! The selection policy: which item a transition applies to.
use std::str::FromStr;

use sea_orm::{DatabaseTransaction, QueryFilter, QueryOrder, prelude::*};

use crate::{EngineError, ResultEngine, Stage, bats, blanks, logs, turnings};

/// Target of a stage transition: an explicit row id, or the not-yet-consumed
/// item with the smallest id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageSelector {
    Id(i32),
    Oldest,
}

impl FromStr for StageSelector {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("oldest") {
            Ok(Self::Oldest)
        } else {
            s.parse().map(Self::Id)
        }
    }
}

/// Generates the per-stage resolver: an explicit id that does not exist is
/// `NotFound`, while an exhausted oldest-unconsumed lookup is `NoneAvailable`.
macro_rules! impl_stage_select {
    ($fn_name:ident, $module:ident, $stage:expr) => {
        pub(super) async fn $fn_name(
            tx: &DatabaseTransaction,
            selector: StageSelector,
        ) -> ResultEngine<$module::Model> {
            match selector {
                StageSelector::Id(id) => $module::Entity::find_by_id(id)
                    .one(tx)
                    .await?
                    .ok_or(EngineError::NotFound { stage: $stage, id }),
                StageSelector::Oldest => $module::Entity::find()
                    .filter($module::Column::Consumed.eq(false))
                    .order_by_asc($module::Column::Id)
                    .one(tx)
                    .await?
                    .ok_or(EngineError::NoneAvailable { stage: $stage }),
            }
        }
    };
}

impl_stage_select!(log, logs, Stage::Log);
impl_stage_select!(blank, blanks, Stage::Blank);
impl_stage_select!(turning, turnings, Stage::Turning);
impl_stage_select!(bat, bats, Stage::Bat);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parses_ids_and_the_oldest_sentinel() {
        assert_eq!("7".parse::<StageSelector>(), Ok(StageSelector::Id(7)));
        assert_eq!("oldest".parse::<StageSelector>(), Ok(StageSelector::Oldest));
        assert_eq!("OLDEST".parse::<StageSelector>(), Ok(StageSelector::Oldest));
        assert!("seven".parse::<StageSelector>().is_err());
    }
}
