//! Rectangular pieces of wood, cut from logs.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blanks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub log_id: i32,
    #[sea_orm(column_type = "Double")]
    pub length: f64,
    pub consumed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::logs::Entity",
        from = "Column::LogId",
        to = "super::logs::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Logs,
    #[sea_orm(has_one = "super::turnings::Entity")]
    Turnings,
}

impl Related<super::logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Logs.def()
    }
}

impl Related<super::turnings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Turnings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
