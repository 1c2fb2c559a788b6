
use parish_catalog_test_utils::prelude::*;
