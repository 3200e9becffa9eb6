pub use anyhow::{anyhow, bail, ensure, Error, Result};
use thiserror::Error as ThisError;

/// Things that can go wrong between a login request and the voter row.
/// Connection acquisition stays distinct from query execution because the
/// two surface as different HTTP responses.
#[derive(Debug, ThisError)]
pub enum VoterLookupError {
  #[error("Environment variable {0} is not set")]
  MissingParameter(&'static str),
  #[error("Failed to connect to the voter database: {0}")]
  Connect(#[source] sqlx::Error),
  #[error("Voter lookup query failed: {0}")]
  Query(#[source] sqlx::Error),
  #[error("Malformed voter row: {0}")]
  MalformedRow(Error),
}

impl VoterLookupError {
  /// True for failures to acquire a usable connection, including absent
  /// connection parameters.
  pub fn is_connection_failure(&self) -> bool {
    matches!(self, Self::MissingParameter(_) | Self::Connect(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn connection_failures_are_classified() {
    assert!(VoterLookupError::MissingParameter("MYSQL_HOST").is_connection_failure());
    assert!(VoterLookupError::Connect(sqlx::Error::PoolClosed).is_connection_failure());
    assert!(!VoterLookupError::Query(sqlx::Error::RowNotFound).is_connection_failure());
    assert!(!VoterLookupError::MalformedRow(anyhow!("empty role")).is_connection_failure());
  }
}
