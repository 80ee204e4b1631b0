//! Blanks shaped on the lathe into a league's profile.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "turnings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub blank_id: i32,
    pub league: String,
    pub consumed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blanks::Entity",
        from = "Column::BlankId",
        to = "super::blanks::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Blanks,
    #[sea_orm(has_one = "super::bats::Entity")]
    Bats,
}

impl Related<super::blanks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blanks.def()
    }
}

impl Related<super::bats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
