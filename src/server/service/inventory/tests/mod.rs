
use std::time::Duration;

use parish_catalog_test_utils::prelude::*;

use crate::server::service::{
    inventory::{FallbackPolicy, InventorySettings},
    retry::RetryPolicy,
};

fn settings(fallback: FallbackPolicy) -> InventorySettings {
    InventorySettings {
        retry: RetryPolicy {
            max_attempts: 5,
            initial_backoff: Duration::from_millis(1),
            max_backoff: Duration::from_millis(5),
        },
        fallback,
    }
}
