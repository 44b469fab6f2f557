//! Constants shared by test setups.
//!
//! None of these are real credentials.

/// HMAC secret used to sign tokens in tests.
pub static TEST_JWT_SECRET: &str = "bubble_test_secret";

/// Placeholder stored in `password_hash` for fixture users.
///
/// This is not a valid PHC string, so logging in as a fixture user always fails;
/// tests that need a working login go through registration instead.
pub static TEST_PASSWORD_HASH: &str = "fixture-password-hash";

/// Default product price used by product fixtures.
pub static TEST_PRODUCT_PRICE: f64 = 10.0;
