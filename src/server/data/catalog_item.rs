use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QuerySelect, SqlErr,
};
use uuid::Uuid;

/// Row values written by the item import, keyed by `(parish_id, inventory_number)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItemUpsert {
    pub parish_id: Uuid,
    pub inventory_number: String,
    pub status: String,
    pub image_url: Option<String>,
    pub user_id: Option<String>,
    pub parish_name: Option<String>,
    pub data: Option<serde_json::Value>,
    pub created_at: chrono::NaiveDateTime,
    pub approved_at: Option<chrono::NaiveDateTime>,
    pub published_at: Option<chrono::NaiveDateTime>,
}

pub struct CatalogItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogItemRepository<'a, C> {
    /// Creates a new instance of [`CatalogItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every inventory number of a parish starting with `prefix`
    ///
    /// # Arguments
    /// - `parish_id`: Parish the numbers belong to
    /// - `prefix`: Inventory prefix including its trailing `-`, e.g. `SJN-2024-PIN-`
    ///
    /// # Returns
    /// - `Ok(Vec<String>)`: Matching inventory numbers in no particular order
    /// - `Err(DbErr)`: Database error
    pub async fn find_inventory_numbers_with_prefix(
        &self,
        parish_id: Uuid,
        prefix: &str,
    ) -> Result<Vec<String>, DbErr> {
        entity::prelude::CatalogItem::find()
            .select_only()
            .column(entity::catalog_item::Column::InventoryNumber)
            .filter(entity::catalog_item::Column::ParishId.eq(parish_id))
            .filter(entity::catalog_item::Column::InventoryNumber.starts_with(prefix))
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    /// Reserves an inventory number by inserting a placeholder row
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The number was free and is now held by the returned row
    /// - `Ok(None)`: Another row already holds `(parish_id, inventory_number)`
    /// - `Err(DbErr)`: Any other database error
    pub async fn reserve(
        &self,
        parish_id: Uuid,
        inventory_number: &str,
        status: &str,
    ) -> Result<Option<entity::catalog_item::Model>, DbErr> {
        let item = entity::catalog_item::ActiveModel {
            parish_id: ActiveValue::Set(parish_id),
            inventory_number: ActiveValue::Set(inventory_number.to_string()),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        match item.insert(self.db).await {
            Ok(model) => Ok(Some(model)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Inserts an item or updates the one already stored under `(parish_id, inventory_number)`
    ///
    /// `created_at` is only written on insert.
    pub async fn upsert(&self, item: CatalogItemUpsert) -> Result<(), DbErr> {
        let model = entity::catalog_item::ActiveModel {
            parish_id: ActiveValue::Set(item.parish_id),
            inventory_number: ActiveValue::Set(item.inventory_number),
            status: ActiveValue::Set(item.status),
            image_url: ActiveValue::Set(item.image_url),
            user_id: ActiveValue::Set(item.user_id),
            parish_name: ActiveValue::Set(item.parish_name),
            data: ActiveValue::Set(item.data),
            created_at: ActiveValue::Set(item.created_at),
            approved_at: ActiveValue::Set(item.approved_at),
            published_at: ActiveValue::Set(item.published_at),
            ..Default::default()
        };

        entity::prelude::CatalogItem::insert(model)
            .on_conflict(
                OnConflict::columns([
                    entity::catalog_item::Column::ParishId,
                    entity::catalog_item::Column::InventoryNumber,
                ])
                .update_columns([
                    entity::catalog_item::Column::Status,
                    entity::catalog_item::Column::ImageUrl,
                    entity::catalog_item::Column::UserId,
                    entity::catalog_item::Column::ParishName,
                    entity::catalog_item::Column::Data,
                    entity::catalog_item::Column::ApprovedAt,
                    entity::catalog_item::Column::PublishedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
