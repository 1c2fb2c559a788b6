use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{de::DeserializeOwned, Deserialize};
use tokio::sync::RwLock;

use crate::{
    model::parish::ReferenceSummaryDto,
    server::{
        error::{config::ConfigError, Error},
        service::parish::alias::{AliasTable, ManualAliasFile},
        util::text::normalize,
    },
};

/// Entry of the local reference catalog of known parishes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferenceParish {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}

/// Files the reference data is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePaths {
    /// JSON array of `{ "name", "location" }` records
    pub catalog: PathBuf,
    /// JSON object `{ "aliases": { ... } }` of manual overrides
    pub aliases: PathBuf,
}

/// Immutable snapshot of the reference catalog and the alias table derived from it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParishReference {
    entries: Vec<ReferenceParish>,
    aliases: AliasTable,
}

impl ParishReference {
    pub fn new(entries: Vec<ReferenceParish>, manual: &HashMap<String, String>) -> Self {
        let aliases = AliasTable::build(&entries, manual);

        Self { entries, aliases }
    }

    /// Loads the reference catalog and manual aliases from disk
    ///
    /// A missing file counts as empty data. A file that exists but cannot be read or
    /// parsed returns [`ConfigError::InvalidReferenceData`].
    pub async fn load(paths: &ReferencePaths) -> Result<Self, Error> {
        let entries: Vec<ReferenceParish> =
            read_json_or_default(&paths.catalog).await?.unwrap_or_default();
        let manual: ManualAliasFile = read_json_or_default(&paths.aliases)
            .await?
            .unwrap_or_default();

        Ok(Self::new(entries, &manual.aliases))
    }

    /// Gets the canonical name an already normalized alias stands for
    pub fn alias(&self, normalized: &str) -> Option<&str> {
        self.aliases.get(normalized)
    }

    /// Snaps a candidate name onto the first matching reference entry
    ///
    /// An entry matches when the normalized candidate equals its normalized
    /// `name location` or `name`, or contains both its normalized name and location.
    pub fn canonical_name(&self, candidate: &str) -> Option<&str> {
        let target = normalize(candidate);
        if target.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| {
                let name = normalize(&entry.name);
                if name.is_empty() {
                    return false;
                }
                let location = normalize(&entry.location);
                let combined = normalize(&format!("{} {}", entry.name, entry.location));

                target == combined
                    || target == name
                    || (!location.is_empty()
                        && target.contains(&location)
                        && target.contains(&name))
            })
            .map(|entry| entry.name.as_str())
    }

    pub fn summary(&self) -> ReferenceSummaryDto {
        ReferenceSummaryDto {
            catalog_entries: self.entries.len(),
            aliases: self.aliases.len(),
        }
    }
}

async fn read_json_or_default<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, Error> {
    let invalid = |reason: String| ConfigError::InvalidReferenceData {
        path: path.display().to_string(),
        reason,
    };

    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Reference file {} not found, using empty data", path.display());
            return Ok(None);
        }
        Err(err) => return Err(invalid(err.to_string()).into()),
    };

    let value = serde_json::from_str(&contents).map_err(|err| invalid(err.to_string()))?;

    Ok(Some(value))
}

/// Shared handle to the current [`ParishReference`] snapshot.
///
/// Readers take a cheap `Arc` clone of the snapshot and release the lock immediately.
/// [`ReferenceStore::reload`] builds a new snapshot off-lock and swaps it in, so a
/// failed reload leaves the previous snapshot in place.
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    paths: ReferencePaths,
    current: Arc<RwLock<Arc<ParishReference>>>,
}

impl ReferenceStore {
    pub fn new(paths: ReferencePaths, reference: ParishReference) -> Self {
        Self {
            paths,
            current: Arc::new(RwLock::new(Arc::new(reference))),
        }
    }

    /// Loads the initial snapshot from `paths`
    pub async fn load(paths: ReferencePaths) -> Result<Self, Error> {
        let reference = ParishReference::load(&paths).await?;

        Ok(Self::new(paths, reference))
    }

    pub async fn snapshot(&self) -> Arc<ParishReference> {
        self.current.read().await.clone()
    }

    /// Re-reads the reference files and replaces the current snapshot
    pub async fn reload(&self) -> Result<ReferenceSummaryDto, Error> {
        let reference = ParishReference::load(&self.paths).await?;
        let summary = reference.summary();

        self.replace(reference).await;

        tracing::info!(
            "Reloaded parish reference data: {} catalog entries, {} aliases",
            summary.catalog_entries,
            summary.aliases
        );

        Ok(summary)
    }

    pub async fn replace(&self, reference: ParishReference) {
        *self.current.write().await = Arc::new(reference);
    }
}
