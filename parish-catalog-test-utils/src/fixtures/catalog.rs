use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Index, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use crate::{
    constant::TEST_ITEM_STATUS,
    error::TestError,
    model::{CatalogItemModel, ConversationModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_item(
        &self,
        parish_id: Uuid,
        inventory_number: &str,
    ) -> Result<CatalogItemModel, TestError> {
        self.insert_item_with_status(parish_id, inventory_number, TEST_ITEM_STATUS)
            .await
    }

    pub async fn insert_item_with_status(
        &self,
        parish_id: Uuid,
        inventory_number: &str,
        status: &str,
    ) -> Result<CatalogItemModel, TestError> {
        Ok(
            entity::prelude::CatalogItem::insert(entity::catalog_item::ActiveModel {
                parish_id: ActiveValue::Set(parish_id),
                inventory_number: ActiveValue::Set(inventory_number.to_string()),
                status: ActiveValue::Set(status.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Make `parish_id` unique on its own, so once a parish holds an item every further
    /// insert for it fails with a unique constraint violation whatever the number.
    pub async fn limit_to_one_item_per_parish(&self) -> Result<(), TestError> {
        let stmt = Index::create()
            .name("idx-catalog_item-parish_id-unique")
            .table(entity::prelude::CatalogItem)
            .col(entity::catalog_item::Column::ParishId)
            .unique()
            .to_owned();

        self.setup.db.execute(&stmt).await?;

        Ok(())
    }

    /// Get every catalog item of a parish ordered by inventory number.
    pub async fn get_items(&self, parish_id: Uuid) -> Result<Vec<CatalogItemModel>, TestError> {
        Ok(entity::prelude::CatalogItem::find()
            .filter(entity::catalog_item::Column::ParishId.eq(parish_id))
            .order_by_asc(entity::catalog_item::Column::InventoryNumber)
            .all(&self.setup.db)
            .await?)
    }

    /// Insert a conversation whose response holds `response` as stored text.
    pub async fn insert_conversation(
        &self,
        response: Option<&str>,
    ) -> Result<ConversationModel, TestError> {
        self.insert_conversation_at(response, Utc::now().naive_utc())
            .await
    }

    pub async fn insert_conversation_at(
        &self,
        response: Option<&str>,
        created_at: NaiveDateTime,
    ) -> Result<ConversationModel, TestError> {
        Ok(
            entity::prelude::Conversation::insert(entity::conversation::ActiveModel {
                id: ActiveValue::Set(Uuid::new_v4()),
                user_id: ActiveValue::Set(None),
                response: ActiveValue::Set(response.map(str::to_string)),
                created_at: ActiveValue::Set(created_at),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn get_conversation(&self, id: Uuid) -> Result<Option<ConversationModel>, TestError> {
        Ok(entity::prelude::Conversation::find_by_id(id)
            .one(&self.setup.db)
            .await?)
    }

    /// Insert a conversation whose response is `value` serialized as JSON.
    pub async fn insert_conversation_json(
        &self,
        value: &serde_json::Value,
    ) -> Result<ConversationModel, TestError> {
        let response = serde_json::to_string(value)?;

        self.insert_conversation(Some(&response)).await
    }
}
