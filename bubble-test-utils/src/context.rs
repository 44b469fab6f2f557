//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` and the setup macros.
//! The context wraps an in-memory SQLite database that lives as long as the test.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// Provides access to the in-memory database and to the fixture helpers
/// (`user()`, `chat()`, `shop()`, `social()`, `board()`).
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_user_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// let alice = test.user().insert_user("alice").await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Create a new test context with an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fresh context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
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
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

/// Creates a `TestContext` with tables for the given entities.
///
/// With no arguments, an empty database is returned, which is useful for
/// asserting behaviour when tables are missing.
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let test = $crate::TestContext::new().await?;

            let schema = $crate::sea_orm::Schema::new($crate::sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_with_index_from_entity($entity),)+
            ];
            test.with_tables(stmts).await?;

            Ok::<_, $crate::TestError>(test)
        }.await
    }};
}

/// Creates a `TestContext` with the user table plus any extra entities.
#[macro_export]
macro_rules! test_setup_with_user_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::test_setup_with_tables!(entity::prelude::BubbleUser)
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        $crate::test_setup_with_tables!(entity::prelude::BubbleUser, $($entity),+)
    }};
}
