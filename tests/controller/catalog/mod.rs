mod delete_catalog_entry;
mod update_catalog_entry;

use super::*;
