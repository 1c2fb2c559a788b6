use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_parish::Parish;

static IDX_CATALOG_ITEM_PARISH_INVENTORY: &str = "idx-catalog_item-parish_id-inventory_number";
static FK_CATALOG_ITEM_PARISH_ID: &str = "fk-catalog_item-parish_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CatalogItem::Id))
                    .col(uuid(CatalogItem::ParishId))
                    .col(string(CatalogItem::InventoryNumber))
                    .col(string(CatalogItem::Status))
                    .col(string_null(CatalogItem::ImageUrl))
                    .col(string_null(CatalogItem::UserId))
                    .col(string_null(CatalogItem::ParishName))
                    .col(json_null(CatalogItem::Data))
                    .col(timestamp(CatalogItem::CreatedAt))
                    .col(timestamp_null(CatalogItem::ApprovedAt))
                    .col(timestamp_null(CatalogItem::PublishedAt))
                    .to_owned(),
            )
            .await?;

        // Inventory numbers are only unique within a parish; allocation relies on
        // this index rejecting the second insert of a racing pair.
        manager
            .create_index(
                Index::create()
                    .name(IDX_CATALOG_ITEM_PARISH_INVENTORY)
                    .table(CatalogItem::Table)
                    .col(CatalogItem::ParishId)
                    .col(CatalogItem::InventoryNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CATALOG_ITEM_PARISH_ID)
                    .from_tbl(CatalogItem::Table)
                    .from_col(CatalogItem::ParishId)
                    .to_tbl(Parish::Table)
                    .to_col(Parish::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CATALOG_ITEM_PARISH_ID)
                    .table(CatalogItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CATALOG_ITEM_PARISH_INVENTORY)
                    .table(CatalogItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CatalogItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CatalogItem {
    Table,
    Id,
    ParishId,
    InventoryNumber,
    Status,
    ImageUrl,
    UserId,
    ParishName,
    Data,
    CreatedAt,
    ApprovedAt,
    PublishedAt,
}
