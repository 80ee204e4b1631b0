//! Finished bats: varnished, paint-stamped, ready to sell.
use sea_orm::entity::prelude::*;

/// What one bat sells for.
pub const PRICE: f64 = 10.00;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub turning_id: i32,
    pub model: String,
    pub consumed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::turnings::Entity",
        from = "Column::TurningId",
        to = "super::turnings::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Turnings,
}

impl Related<super::turnings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turnings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
