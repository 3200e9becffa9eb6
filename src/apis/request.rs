use crate::{
  entity::{Password, TryNewEntity, VoterId},
  error::*,
};
use serde::Deserialize;

/// Query string of `GET /login`. Both parameters arrive as raw strings so
/// absence and emptiness can be rejected explicitly before any database
/// work happens.
#[derive(Deserialize, Debug, Clone)]
pub struct LoginRequest {
  pub voter_id: Option<String>,
  pub password: Option<String>,
}

impl LoginRequest {
  pub fn voter_id(&self) -> Result<VoterId> {
    let Some(raw) = self.voter_id.as_deref() else {
      bail!("voter_id is missing");
    };
    VoterId::new(raw)
  }

  pub fn password(&self) -> Result<Password> {
    let Some(raw) = self.password.as_deref() else {
      bail!("password is missing");
    };
    Password::new(raw)
  }
}
