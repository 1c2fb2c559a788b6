//! Catalog entry maintenance.
//!
//! A catalog entry is the JSON description an assistant conversation produced for an
//! object, stored as text in the conversation's `response` column.

#[cfg(test)]
mod tests;

use sea_orm::ConnectionTrait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    model::catalog::UpdateCatalogEntryDto,
    server::{
        data::{conversation::ConversationRepository, image::ImageStore, parish::ParishRepository},
        error::{catalog::CatalogError, Error},
        model::db::ParishModel,
        service::import::extract::is_truthy,
    },
};

/// Fields stored as lists of strings.
const LIST_FIELDS: [&str; 3] = ["materiales", "tecnicas", "deterioros_visibles"];

/// Change key holding a parish ID or name to resolve instead of storing it.
const PARISH_INPUT_KEY: &str = "parish_input";

pub struct CatalogService<'a, C: ConnectionTrait> {
    db: &'a C,
    images: &'a ImageStore,
}

impl<'a, C: ConnectionTrait> CatalogService<'a, C> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a C, images: &'a ImageStore) -> Self {
        Self { db, images }
    }

    /// Merges changes into a stored catalog entry
    ///
    /// List fields are normalized to arrays of trimmed, non-empty strings whether or not
    /// they were changed. A `parish_input` change is resolved against stored parishes
    /// by ID or exact name and replaced by `parish_id` and `parish_name`.
    ///
    /// # Returns
    /// - `Ok(Map)`: The entry as stored after the update
    /// - `Err(Error::CatalogError(CatalogError::InvalidId))`: `id` is not a UUID
    /// - `Err(Error::CatalogError(CatalogError::EntryNotFound))`: No entry with that ID
    /// - `Err(Error::DbErr)`: Database error
    pub async fn update(&self, request: UpdateCatalogEntryDto) -> Result<Map<String, Value>, Error> {
        let id = parse_entry_id(&request.id)?;
        let repo = ConversationRepository::new(self.db);

        let Some(conversation) = repo.get_by_id(id).await? else {
            return Err(CatalogError::EntryNotFound(id).into());
        };

        let mut current = parse_entry(id, conversation.response.as_deref());
        let mut changes = request.changes;

        for field in LIST_FIELDS {
            let value = changes
                .get(field)
                .filter(|value| !value.is_null())
                .or_else(|| current.get(field))
                .map(to_string_list)
                .unwrap_or_default();

            changes.insert(field.to_string(), Value::Array(value));
        }

        let mut cleared: Vec<&str> = Vec::new();
        if let Some(input) = changes.remove(PARISH_INPUT_KEY) {
            let input = match input {
                Value::String(input) => input.trim().to_string(),
                Value::Null => String::new(),
                other => other.to_string(),
            };

            if input.is_empty() {
                cleared.extend(["parish_id", "parish_name"]);
            } else {
                match self.find_parish(&input).await? {
                    Some(parish) => {
                        changes.insert("parish_id".to_string(), Value::String(parish.id.to_string()));
                        changes.insert("parish_name".to_string(), Value::String(parish.name));
                    }
                    None => {
                        cleared.push("parish_id");
                        changes.insert("parish_name".to_string(), Value::String(input));
                    }
                }
            }
        }

        current.extend(changes);
        for key in cleared {
            current.remove(key);
        }

        let response = serde_json::to_string(&current)?;
        if repo.update_response(id, response).await?.is_none() {
            return Err(CatalogError::EntryNotFound(id).into());
        }

        Ok(current)
    }

    /// Deletes a catalog entry and its image
    ///
    /// Failing to remove the image is logged and does not stop the entry from being
    /// deleted.
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let id = parse_entry_id(id)?;
        let repo = ConversationRepository::new(self.db);

        let Some(conversation) = repo.get_by_id(id).await? else {
            return Err(CatalogError::EntryNotFound(id).into());
        };

        let image_path = conversation
            .response
            .as_deref()
            .and_then(|response| serde_json::from_str::<Value>(response).ok())
            .and_then(|entry| match entry.get("image_path") {
                value if !is_truthy(value) => None,
                Some(Value::String(path)) => Some(path.clone()),
                Some(other) => Some(other.to_string()),
                None => None,
            });

        if let Some(image_path) = image_path {
            match self.images.remove(&image_path).await {
                Ok(true) => tracing::debug!("Removed image {} of catalog entry {}", image_path, id),
                Ok(false) => tracing::warn!(
                    "Image {} of catalog entry {} was already missing",
                    image_path,
                    id
                ),
                Err(err) => tracing::warn!(
                    "Failed to remove image {} of catalog entry {}: {}",
                    image_path,
                    id,
                    err
                ),
            }
        }

        let result = repo.delete(id).await?;
        if result.rows_affected == 0 {
            return Err(CatalogError::EntryNotFound(id).into());
        }

        Ok(())
    }

    /// Finds a parish by ID when `input` is a UUID, otherwise by exact name
    async fn find_parish(&self, input: &str) -> Result<Option<ParishModel>, Error> {
        let repo = ParishRepository::new(self.db);

        let parish = match Uuid::parse_str(input) {
            Ok(parish_id) => repo.get_by_id(parish_id).await?,
            Err(_) => repo.find_by_exact_name(input).await?,
        };

        Ok(parish)
    }
}

fn parse_entry_id(id: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(id.trim()).map_err(|_| CatalogError::InvalidId(id.to_string()).into())
}

/// Parses a stored entry, treating anything other than a JSON object as empty
fn parse_entry(id: Uuid, response: Option<&str>) -> Map<String, Value> {
    let Some(response) = response.filter(|response| !response.trim().is_empty()) else {
        return Map::new();
    };

    match serde_json::from_str::<Value>(response) {
        Ok(Value::Object(entry)) => entry,
        _ => {
            tracing::warn!(
                "Catalog entry {} does not hold a JSON object, it will be overwritten",
                id
            );
            Map::new()
        }
    }
}

/// Normalizes a list field to trimmed, non-empty strings
///
/// Arrays keep their elements, strings are split on commas, anything else is empty.
fn to_string_list(value: &Value) -> Vec<Value> {
    let items: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(item) => item.trim().to_string(),
                other => other.to_string(),
            })
            .collect(),
        Value::String(items) => items.split(',').map(|item| item.trim().to_string()).collect(),
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter(|item| !item.is_empty())
        .map(Value::String)
        .collect()
}
