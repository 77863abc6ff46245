//! Create `planets` catalog table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Planets::Name, 250).not_null())
                    .col(ColumnDef::new(Planets::Population).integer().null())
                    .col(ColumnDef::new(Planets::AverageTemp).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Planets::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Planets { Table, Id, Name, Population, AverageTemp }
