//! Standard values used by fixtures when a test does not care about them.

/// Diocese assigned to parishes created with `insert_mock_parish`.
pub static TEST_DIOCESE: &str = "Guadix";

/// Location assigned to parishes created with `insert_mock_parish`.
pub static TEST_LOCATION: &str = "Guadix";

/// Status assigned to catalog items created with `insert_item`.
pub static TEST_ITEM_STATUS: &str = "published";
