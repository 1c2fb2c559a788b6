//! Import of catalog entries into catalog items.
//!
//! Walks every conversation, keeps the entries that describe a visible object of a
//! known parish and upserts them as catalog items keyed by parish and inventory number.

pub mod extract;

#[cfg(test)]
mod tests;

use std::path::Path;

use chrono::{DateTime, Utc};
use sea_orm::ConnectionTrait;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::server::{
    data::{
        catalog_item::{CatalogItemRepository, CatalogItemUpsert},
        conversation::ConversationRepository,
    },
    error::{parish::ParishError, Error},
    model::db::ConversationModel,
    service::{
        import::extract::{
            extract_inventory_number, has_image, is_truthy, normalize_status, parse_entry,
            passes_visibility, text_field, ItemStatus,
        },
        parish::{reference::ParishReference, resolver::ParishResolver},
    },
    util::time::parse_timestamp,
};

/// Conversations fetched per page.
pub const IMPORT_PAGE_SIZE: u64 = 500;

/// Issues logged at the end of an import, the report holds all of them.
const LOGGED_ISSUES: usize = 20;

/// Why a conversation was not imported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportIssue {
    pub id: Uuid,
    pub reason: String,
    pub parish_name: Option<String>,
    pub status: Option<ItemStatus>,
    pub has_image: Option<bool>,
}

/// Summary of an import run, written to disk as pretty JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportReport {
    pub dry_run: bool,
    pub migrated_count: usize,
    pub skipped_count: usize,
    pub issues: Vec<ImportIssue>,
    pub generated_at: DateTime<Utc>,
}

impl ImportReport {
    /// Writes the report as pretty printed JSON
    pub async fn write(&self, path: &Path) -> Result<(), Error> {
        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents).await?;

        Ok(())
    }
}

pub struct ImportService<'a, C: ConnectionTrait> {
    db: &'a C,
    reference: &'a ParishReference,
    dry_run: bool,
}

impl<'a, C: ConnectionTrait> ImportService<'a, C> {
    /// Creates a new instance of [`ImportService`]
    ///
    /// # Arguments
    /// - `dry_run`: Count importable entries without writing any catalog item
    pub fn new(db: &'a C, reference: &'a ParishReference, dry_run: bool) -> Self {
        Self {
            db,
            reference,
            dry_run,
        }
    }

    /// Imports every conversation, newest first
    ///
    /// Entries that cannot be imported, and items whose upsert fails, are counted as
    /// skipped and reported as issues. Failing to read conversations or resolve parishes
    /// aborts the import.
    pub async fn run(&self) -> Result<ImportReport, Error> {
        let conversations = ConversationRepository::new(self.db);
        let mut report = ImportReport {
            dry_run: self.dry_run,
            migrated_count: 0,
            skipped_count: 0,
            issues: Vec::new(),
            generated_at: Utc::now(),
        };

        let mut offset = 0;
        loop {
            let page = conversations.get_page(offset, IMPORT_PAGE_SIZE).await?;
            let fetched = page.len() as u64;

            tracing::debug!("Importing {} conversations from offset {}", fetched, offset);

            for conversation in page {
                match self.import_conversation(&conversation).await? {
                    Ok(()) => report.migrated_count += 1,
                    Err(issue) => {
                        report.skipped_count += 1;
                        report.issues.push(issue);
                    }
                }
            }

            if fetched < IMPORT_PAGE_SIZE {
                break;
            }
            offset += IMPORT_PAGE_SIZE;
        }

        report.generated_at = Utc::now();

        tracing::info!(
            "Import completed{}: {} migrated, {} skipped",
            if self.dry_run { " (dry run)" } else { "" },
            report.migrated_count,
            report.skipped_count
        );
        for issue in report.issues.iter().take(LOGGED_ISSUES) {
            tracing::warn!("Skipped conversation {}: {}", issue.id, issue.reason);
        }

        Ok(report)
    }

    /// Imports a single conversation
    ///
    /// The outer result carries errors that abort the import, the inner one the issue
    /// explaining why this conversation was skipped.
    async fn import_conversation(
        &self,
        conversation: &ConversationModel,
    ) -> Result<Result<(), ImportIssue>, Error> {
        let Some(entry) = parse_entry(conversation.response.as_deref()) else {
            return Ok(Err(ImportIssue {
                id: conversation.id,
                reason: "response not parseable".to_string(),
                parish_name: None,
                status: None,
                has_image: None,
            }));
        };

        let issue = |reason: String| ImportIssue {
            id: conversation.id,
            reason,
            parish_name: text_field(&entry, "parish_name"),
            status: Some(normalize_status(&entry)),
            has_image: Some(has_image(&entry)),
        };

        if !(is_truthy(entry.get("tipo_objeto")) || is_truthy(entry.get("name"))) {
            return Ok(Err(issue(
                "missing key fields (tipo_objeto/name)".to_string(),
            )));
        }

        if !passes_visibility(&entry) {
            return Ok(Err(issue(
                "fails visibility rule (approval requires an image)".to_string(),
            )));
        }

        let parish_id_input = text_field(&entry, "parish_id");
        let parish_name_input = text_field(&entry, "parish_name");

        let resolved = ParishResolver::new(self.db, self.reference)
            .resolve(parish_id_input.as_deref(), parish_name_input.as_deref())
            .await;
        let parish_id = match resolved {
            Ok(Some(parish_match)) => parish_match.parish_id,
            Ok(None) | Err(Error::ParishError(ParishError::MissingInput)) => {
                return Ok(Err(issue("parish_id not resolvable".to_string())));
            }
            Err(err) => return Err(err),
        };

        let parish = parish_name_input
            .or(parish_id_input)
            .unwrap_or_else(|| parish_id.to_string());
        let inventory_number = extract_inventory_number(&entry, conversation.id, &parish);

        if self.dry_run {
            return Ok(Ok(()));
        }

        let item = to_upsert(conversation, &entry, parish_id, inventory_number);
        if let Err(err) = CatalogItemRepository::new(self.db).upsert(item).await {
            return Ok(Err(issue(format!("upsert error: {err}"))));
        }

        Ok(Ok(()))
    }

}

fn to_upsert(
    conversation: &ConversationModel,
    entry: &Map<String, Value>,
    parish_id: Uuid,
    inventory_number: String,
) -> CatalogItemUpsert {
    let timestamp = |field: &str| text_field(entry, field).and_then(|t| parse_timestamp(&t));

    CatalogItemUpsert {
        parish_id,
        inventory_number,
        status: normalize_status(entry).as_str().to_string(),
        image_url: text_field(entry, "image_url"),
        user_id: text_field(entry, "user_id").or_else(|| conversation.user_id.clone()),
        parish_name: text_field(entry, "parish_name"),
        approved_at: timestamp("approved_at"),
        published_at: timestamp("published_at"),
        created_at: Utc::now().naive_utc(),
        data: Some(Value::Object(entry.clone())),
    }
}
