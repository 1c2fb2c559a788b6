use sea_orm_migration::{prelude::*, schema::*};

static IDX_PARISH_DIOCESE: &str = "idx-parish-diocese";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parish::Table)
                    .if_not_exists()
                    .col(pk_uuid(Parish::Id))
                    .col(string(Parish::Name))
                    .col(string(Parish::Location))
                    .col(string(Parish::Diocese))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PARISH_DIOCESE)
                    .table(Parish::Table)
                    .col(Parish::Diocese)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PARISH_DIOCESE)
                    .table(Parish::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Parish::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Parish {
    Table,
    Id,
    Name,
    Location,
    Diocese,
}
