use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

/// Access to the assistant conversations that hold catalog entry payloads.
///
/// Each conversation's `response` column holds the catalog entry as a JSON object
/// serialized to text.
pub struct ConversationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConversationRepository<'a, C> {
    /// Creates a new instance of [`ConversationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::conversation::Model>, DbErr> {
        entity::prelude::Conversation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Replaces the stored response of a conversation
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated conversation
    /// - `Ok(None)`: No conversation exists with the provided ID
    /// - `Err(DbErr)`: Database error
    pub async fn update_response(
        &self,
        id: Uuid,
        response: String,
    ) -> Result<Option<entity::conversation::Model>, DbErr> {
        let conversation = match entity::prelude::Conversation::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(conversation) => conversation,
            None => return Ok(None),
        };

        let mut conversation_am: entity::conversation::ActiveModel = conversation.into();
        conversation_am.response = ActiveValue::Set(Some(response));

        let conversation = conversation_am.update(self.db).await?;

        Ok(Some(conversation))
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResult, DbErr> {
        entity::prelude::Conversation::delete_by_id(id)
            .exec(self.db)
            .await
    }

    /// Gets a page of conversations, newest first
    pub async fn get_page(
        &self,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<entity::conversation::Model>, DbErr> {
        entity::prelude::Conversation::find()
            .order_by_desc(entity::conversation::Column::CreatedAt)
            .order_by_asc(entity::conversation::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }
}
