use super::{Entity, TryNewEntity};
use crate::error::*;
use std::borrow::Cow;
use validator::Validate;

/// Identifier of a voter record. Uniqueness is enforced by the external
/// database, not here; the only local constraint is non-emptiness.
#[derive(Debug, Clone, Eq, PartialEq, Validate)]
pub struct VoterId {
  #[validate(length(min = 1))]
  value: String,
}

impl<'a, T: Into<Cow<'a, str>>> TryNewEntity<T> for VoterId {
  fn new(voter_id: T) -> Result<Self> {
    let value = voter_id.into().to_string();
    let object = Self { value };
    object.validate()?;
    Ok(object)
  }
}

impl Entity for VoterId {
  fn as_str(&self) -> &str {
    &self.value
  }
  fn into_string(self) -> String {
    self.value
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_nonempty_id() {
    let id = VoterId::new("V1");
    assert!(id.is_ok());
    assert_eq!(id.unwrap().as_str(), "V1");
  }

  #[test]
  fn rejects_empty_id() {
    assert!(VoterId::new("").is_err());
  }
}
