use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Server::Table)
                    .if_not_exists()
                    .col(pk_auto(Server::Id))
                    .col(string(Server::Name))
                    .col(string_uniq(Server::Ip))
                    .col(string(Server::Flag).default(""))
                    .col(string(Server::File).default(""))
                    .col(timestamp_with_time_zone(Server::CreatedAt))
                    .col(timestamp_with_time_zone(Server::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Name is the most common filter on the list endpoint
        manager
            .create_index(
                Index::create()
                    .name("idx_server_name")
                    .table(Server::Table)
                    .col(Server::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Server::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Server {
    Table,
    Id,
    Name,
    Ip,
    Flag,
    File,
    CreatedAt,
    UpdatedAt,
}
