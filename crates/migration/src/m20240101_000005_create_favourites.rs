//! Create `favourites` join table with FK to `user`.
//!
//! A row points at exactly one catalog item through (`kind`, `item_id`);
//! the item side is checked by the service, the user side by the FK.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favourites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favourites::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favourites::UserId).integer().not_null())
                    .col(string_len(Favourites::Kind, 16).not_null())
                    .col(ColumnDef::new(Favourites::ItemId).integer().not_null())
                    .col(timestamp_with_time_zone(Favourites::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favourites_user")
                            .from(Favourites::Table, Favourites::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Favourites::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Favourites { Table, Id, UserId, Kind, ItemId, CreatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }
