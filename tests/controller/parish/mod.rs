mod list_parishes;
mod reload_reference;

use super::*;
