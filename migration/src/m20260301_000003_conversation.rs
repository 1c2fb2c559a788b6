use sea_orm_migration::{prelude::*, schema::*};

static IDX_CONVERSATION_CREATED_AT: &str = "idx-conversation-created_at";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Conversation::Table)
                    .if_not_exists()
                    .col(pk_uuid(Conversation::Id))
                    .col(string_null(Conversation::UserId))
                    .col(text_null(Conversation::Response))
                    .col(timestamp(Conversation::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CONVERSATION_CREATED_AT)
                    .table(Conversation::Table)
                    .col(Conversation::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CONVERSATION_CREATED_AT)
                    .table(Conversation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Conversation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Conversation {
    Table,
    Id,
    UserId,
    Response,
    CreatedAt,
}
