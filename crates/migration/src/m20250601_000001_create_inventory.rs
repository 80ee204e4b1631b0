//! Initial schema migration - creates all tables from scratch.
//!
//! It creates the complete schema for batmill:
//!
//! - `transactions`: the cash ledger (receipts and disbursements)
//! - `logs`: raw stock inventory
//! - `blanks`: pieces cut from logs
//! - `turnings`: blanks shaped on the lathe
//! - `bats`: finished bats
//!
//! Every inventory table carries a `consumed` flag defaulting to false; rows
//! are never deleted, so the tables form the full history of the pipeline.
//! The migration also seeds the opening capital into the ledger.

use sea_orm_migration::prelude::*;

/// Opening ledger entry, so a fresh database can afford its first logs.
const INITIAL_CAPITAL: f64 = 300.00;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Transactions {
    Table,
    Id,
    Dollars,
}

#[derive(Iden)]
enum Logs {
    Table,
    Id,
    Species,
    Consumed,
}

#[derive(Iden)]
enum Blanks {
    Table,
    Id,
    LogId,
    Length,
    Consumed,
}

#[derive(Iden)]
enum Turnings {
    Table,
    Id,
    BlankId,
    League,
    Consumed,
}

#[derive(Iden)]
enum Bats {
    Table,
    Id,
    TurningId,
    Model,
    Consumed,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Transactions (cash ledger)
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Transactions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Transactions::Dollars).double().not_null())
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Logs
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Logs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Logs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Logs::Species).string().not_null())
                    .col(
                        ColumnDef::new(Logs::Consumed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 3. Blanks
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Blanks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blanks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Blanks::LogId).integer().not_null())
                    .col(ColumnDef::new(Blanks::Length).double().not_null())
                    .col(
                        ColumnDef::new(Blanks::Consumed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blanks-log_id")
                            .from(Blanks::Table, Blanks::LogId)
                            .to(Logs::Table, Logs::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 4. Turnings
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Turnings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Turnings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Turnings::BlankId).integer().not_null())
                    .col(ColumnDef::new(Turnings::League).string().not_null())
                    .col(
                        ColumnDef::new(Turnings::Consumed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-turnings-blank_id")
                            .from(Turnings::Table, Turnings::BlankId)
                            .to(Blanks::Table, Blanks::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 5. Bats
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Bats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bats::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bats::TurningId).integer().not_null())
                    .col(ColumnDef::new(Bats::Model).string().not_null())
                    .col(
                        ColumnDef::new(Bats::Consumed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-bats-turning_id")
                            .from(Bats::Table, Bats::TurningId)
                            .to(Turnings::Table, Turnings::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 6. Opening capital
        // ───────────────────────────────────────────────────────────────────
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Transactions::Table)
                    .columns([Transactions::Dollars])
                    .values_panic([INITIAL_CAPITAL.into()])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse order of creation (respecting FK dependencies)
        manager
            .drop_table(Table::drop().table(Bats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Turnings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Blanks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Logs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).to_owned())
            .await?;
        Ok(())
    }
}
