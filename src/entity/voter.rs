use super::{Entity, Password, Role, VoterId};

/// One row of the externally owned voters table. This server never creates,
/// updates or deletes these; it only reads them during login.
#[derive(Debug, Clone)]
pub struct Voter {
  pub voter_id: VoterId,
  pub password: Password,
  pub role: Role,
}

impl Voter {
  pub fn voter_id(&self) -> &str {
    self.voter_id.as_str()
  }
  pub fn role(&self) -> &str {
    self.role.as_str()
  }
  pub fn into_role(self) -> Role {
    self.role
  }
}
