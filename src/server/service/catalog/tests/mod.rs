
use parish_catalog_test_utils::prelude::*;
use serde_json::json;

use crate::server::{
    data::image::ImageStore,
    error::{catalog::CatalogError, Error},
    service::catalog::CatalogService,
};
