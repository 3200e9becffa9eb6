mod voter_table;

use crate::{
  entity::{Password, Voter, VoterId},
  error::VoterLookupError,
};
use async_trait::async_trait;

pub use voter_table::{ConnectParams, MysqlVoterTable};

#[async_trait]
pub trait VoterTable {
  /// Equality lookup over both columns at once. `Ok(None)` means the
  /// credentials matched no row; that is a caller-side outcome, not an error.
  async fn find_by_credentials(
    &self,
    voter_id: &VoterId,
    password: &Password,
  ) -> std::result::Result<Option<Voter>, VoterLookupError>;
}
