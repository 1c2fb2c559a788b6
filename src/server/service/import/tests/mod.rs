
use parish_catalog_test_utils::prelude::*;
use serde_json::json;

use crate::server::service::{import::ImportService, parish::reference::ParishReference};
