pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use sea_orm;

pub mod prelude {
    pub use crate::{
        constant::{TEST_JWT_SECRET, TEST_PASSWORD_HASH},
        test_setup_with_tables, test_setup_with_user_tables, TestBuilder, TestContext, TestError,
    };
}
