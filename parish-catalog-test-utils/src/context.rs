//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database that lives as long as the context.

use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    ConnectionTrait, Database, DatabaseConnection,
};

use crate::error::TestError;

/// Name of the unique index guarding inventory numbers, matching the migration.
pub const CATALOG_ITEM_UNIQUE_INDEX: &str = "idx-catalog_item-parish_id-inventory_number";

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_catalog_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixtures helpers
/// let parish = test.parish().insert_mock_parish("Santiago Apóstol").await?;
/// test.catalog().insert_item(parish.id, "SAP-2024-PIN-001").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context with an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Create the unique `(parish_id, inventory_number)` index on `catalog_item`.
    ///
    /// Tables generated from entities carry no composite indexes, so the constraint
    /// inventory allocation relies on is added separately.
    pub(crate) async fn with_catalog_item_unique_index(&self) -> Result<(), TestError> {
        let stmt = Index::create()
            .name(CATALOG_ITEM_UNIQUE_INDEX)
            .table(entity::prelude::CatalogItem)
            .col(entity::catalog_item::Column::ParishId)
            .col(entity::catalog_item::Column::InventoryNumber)
            .unique()
            .to_owned();

        self.db.execute(&stmt).await?;

        Ok(())
    }
}
