//! The cash ledger, persisted in the `transactions` table.
//!
//! Entries are append-only: positive dollars are receipts, negative dollars
//! are disbursements. The balance is recomputed from the full table on every
//! query, so it is trivially consistent with the append-only log.
use sea_orm::{ConnectionTrait, DbErr, Statement, entity::prelude::*};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Double")]
    pub dollars: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Sum of all entries, on whichever connection or transaction the caller is
/// working in.
pub(crate) async fn balance_with<C: ConnectionTrait>(conn: &C) -> Result<f64, DbErr> {
    let stmt = Statement::from_string(
        conn.get_database_backend(),
        "SELECT COALESCE(SUM(dollars), 0.0) AS total FROM transactions".to_string(),
    );
    let row = conn.query_one(stmt).await?;
    Ok(row
        .and_then(|r| r.try_get::<f64>("", "total").ok())
        .unwrap_or(0.0))
}
