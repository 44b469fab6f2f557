//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::Role;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_chat_tables: bool,
    include_shop_tables: bool,
    include_social_tables: bool,
    include_board_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, Role)>,
    products: Vec<(String, i32)>, // (name, stock)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_chat_tables: false,
            include_shop_tables: false,
            include_social_tables: false,
            include_board_tables: false,
            users: Vec::new(),
            products: Vec::new(),
        }
    }

    /// Add the user table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add chat room, participant and message tables (implies user tables).
    pub fn with_chat_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_chat_tables = true;
        self
    }

    /// Add product, cart and order tables (implies user tables).
    pub fn with_shop_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_shop_tables = true;
        self
    }

    /// Add post and follow tables (implies user tables).
    pub fn with_social_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_social_tables = true;
        self
    }

    /// Add board, column and task tables (implies user tables).
    pub fn with_board_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_board_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, including its unique keys, which will be
    /// executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bubble_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), bubble_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(BubbleUser)
    ///     .with_table(SocialPost)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_with_index_from_entity(entity));
        self
    }

    /// Insert a user with the `USER` role during `build()` (implies user tables).
    ///
    /// Users are inserted in the order they are queued, so the first queued user gets ID 1.
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.include_user_tables = true;
        self.users.push((username.into(), Role::User));
        self
    }

    /// Insert a user with the `ADMIN` role during `build()` (implies user tables).
    pub fn with_admin(mut self, username: impl Into<String>) -> Self {
        self.include_user_tables = true;
        self.users.push((username.into(), Role::Admin));
        self
    }

    /// Insert a product with the given stock during `build()` (implies shop tables).
    pub fn with_product(mut self, name: impl Into<String>, stock: i32) -> Self {
        self.include_user_tables = true;
        self.include_shop_tables = true;
        self.products.push((name.into(), stock));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (grouped tables first, then custom tables)
    /// 2. Inserts users, then products
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.push(schema.create_table_with_index_from_entity(entity::prelude::BubbleUser));
        }

        if self.include_chat_tables {
            all_tables.extend(vec![
                schema.create_table_with_index_from_entity(entity::prelude::ChatRoom),
                schema.create_table_with_index_from_entity(entity::prelude::ChatParticipant),
                schema.create_table_with_index_from_entity(entity::prelude::ChatMessage),
            ]);
        }

        if self.include_shop_tables {
            all_tables.extend(vec![
                schema.create_table_with_index_from_entity(entity::prelude::ShopProduct),
                schema.create_table_with_index_from_entity(entity::prelude::ShopCart),
                schema.create_table_with_index_from_entity(entity::prelude::ShopCartItem),
                schema.create_table_with_index_from_entity(entity::prelude::ShopOrder),
                schema.create_table_with_index_from_entity(entity::prelude::ShopOrderItem),
            ]);
        }

        if self.include_social_tables {
            all_tables.extend(vec![
                schema.create_table_with_index_from_entity(entity::prelude::SocialPost),
                schema.create_table_with_index_from_entity(entity::prelude::SocialFollow),
            ]);
        }

        if self.include_board_tables {
            all_tables.extend(vec![
                schema.create_table_with_index_from_entity(entity::prelude::Board),
                schema.create_table_with_index_from_entity(entity::prelude::BoardColumn),
                schema.create_table_with_index_from_entity(entity::prelude::BoardTask),
            ]);
        }

        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (username, role) in self.users {
            test.user().insert_user_with_role(&username, role).await?;
        }

        for (name, stock) in self.products {
            test.shop().insert_product(&name, stock).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
