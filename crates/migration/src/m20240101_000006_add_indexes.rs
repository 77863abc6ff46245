use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // User: lookup by user_name on login
        manager
            .create_index(
                Index::create()
                    .name("idx_user_user_name")
                    .table(User::Table)
                    .col(User::UserName)
                    .to_owned(),
            )
            .await?;

        // Favourites: composite unique (user_id, kind, item_id)
        manager
            .create_index(
                Index::create()
                    .name("uniq_favourite_user_kind_item")
                    .table(Favourites::Table)
                    .col(Favourites::UserId)
                    .col(Favourites::Kind)
                    .col(Favourites::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_user_name").table(User::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_favourite_user_kind_item").table(Favourites::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User { Table, UserName }

#[derive(DeriveIden)]
enum Favourites { Table, UserId, Kind, ItemId }
