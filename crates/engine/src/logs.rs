//! Raw stock: wooden logs, the root of every pipeline lineage.
//!
//! A log is never deleted. Cutting marks it consumed and creates its blanks,
//! so the table doubles as the audit record of everything ever bought.
use sea_orm::entity::prelude::*;

/// What one log costs to buy.
pub const COST: f64 = 20.00;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub species: String,
    pub consumed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::blanks::Entity")]
    Blanks,
}

impl Related<super::blanks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blanks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
