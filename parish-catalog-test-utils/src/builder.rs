//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// parish fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    parishes: Vec<(String, String, String)>, // (name, location, diocese)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            parishes: Vec::new(),
        }
    }

    /// Add every catalog table to the test database.
    ///
    /// Creates the Parish, CatalogItem and Conversation tables plus the unique
    /// `(parish_id, inventory_number)` index on CatalogItem.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use parish_catalog_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), parish_catalog_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Parish)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a parish into the database during `build()`.
    ///
    /// Requires the parish table, usually via [`TestBuilder::with_catalog_tables`].
    pub fn with_parish(mut self, name: &str, location: &str, diocese: &str) -> Self {
        self.parishes
            .push((name.to_string(), location.to_string(), diocese.to_string()));
        self
    }

    /// Build the test context, creating tables and inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Parish),
                schema.create_table_from_entity(entity::prelude::CatalogItem),
                schema.create_table_from_entity(entity::prelude::Conversation),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        if self.include_catalog_tables {
            setup.with_catalog_item_unique_index().await?;
        }

        // 2. Insert database fixtures
        for (name, location, diocese) in self.parishes {
            setup
                .parish()
                .insert_parish(&name, &location, &diocese)
                .await?;
        }

        Ok(setup)
    }
}
