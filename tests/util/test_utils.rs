//! Test utilities for creating AppState from a TestContext

use std::{path::Path, time::Duration};

use parish_catalog::server::{
    data::image::ImageStore,
    model::app::AppState,
    service::{
        inventory::{FallbackPolicy, InventorySettings},
        parish::reference::{ParishReference, ReferencePaths, ReferenceStore},
        retry::RetryPolicy,
    },
};
use parish_catalog_test_utils::{constant::TEST_DIOCESE, TestContext};

/// Inventory settings with millisecond backoff so conflict retries stay fast
pub fn test_inventory_settings() -> InventorySettings {
    InventorySettings {
        retry: RetryPolicy {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(5),
        },
        fallback: FallbackPolicy::Reject,
    }
}

/// Reference paths inside `dir`, which may or may not exist
pub fn reference_paths(dir: &Path) -> ReferencePaths {
    ReferencePaths {
        catalog: dir.join("parishes.json"),
        aliases: dir.join("parish-aliases.json"),
    }
}

/// Extension trait for TestContext to create AppState
pub trait TestContextExt {
    /// AppState with empty reference data and an image store under `dir`
    fn into_app_state(&self, dir: &Path) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self, dir: &Path) -> AppState {
        AppState {
            db: self.db.clone(),
            reference: ReferenceStore::new(reference_paths(dir), ParishReference::default()),
            inventory: test_inventory_settings(),
            images: ImageStore::new(dir.join("images")),
            default_diocese: TEST_DIOCESE.to_string(),
        }
    }
}
