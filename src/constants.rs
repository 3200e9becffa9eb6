pub const THREAD_NAME: &str = "voting_backend";

pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "8000";

/// Fixed acknowledgment body of the root endpoint.
pub const HEALTH_CHECK_MESSAGE: &str = "Backend server is running!";

// Database settings. The voters table is owned and migrated by the election
// administration tooling; this server only ever reads it.
pub const VOTER_TABLE_NAME: &str = "voters";

// Environment variables holding the MySQL connection parameters. They are
// looked up on every connection attempt, never cached at startup.
pub const MYSQL_HOST_VAR: &str = "MYSQL_HOST";
pub const MYSQL_USER_VAR: &str = "MYSQL_USER";
pub const MYSQL_PASSWORD_VAR: &str = "MYSQL_PASSWORD";
pub const MYSQL_DB_VAR: &str = "MYSQL_DB";
