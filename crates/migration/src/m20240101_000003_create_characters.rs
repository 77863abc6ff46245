//! Create `characters` catalog table. `homeworld` is free text, not a FK.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string_len(Characters::Name, 250).not_null())
                    .col(string_len(Characters::Race, 250).not_null())
                    .col(string_len(Characters::Homeworld, 250).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Characters::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Characters { Table, Id, Name, Race, Homeworld }
