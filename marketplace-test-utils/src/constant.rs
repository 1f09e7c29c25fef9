pub const TEST_API_URL: &str = "http://marketplace.test";
pub const TEST_CSRF_TOKEN: &str = "test-csrf-token";
pub const TEST_ACCESS_TOKEN: &str = "test-access-token";
pub const TEST_USER_ID: i64 = 42;
pub const TEST_USERNAME: &str = "jane@example.com";
