//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction,
//! suitable for unit tests.

use uuid::Uuid;

use crate::{
    constant::{TEST_DIOCESE, TEST_LOCATION},
    model::ParishModel,
};

/// Create a mock parish model in the test diocese with a random ID.
pub fn mock_parish_model(name: &str) -> ParishModel {
    ParishModel {
        id: Uuid::new_v4(),
        name: name.to_string(),
        location: TEST_LOCATION.to_string(),
        diocese: TEST_DIOCESE.to_string(),
    }
}
