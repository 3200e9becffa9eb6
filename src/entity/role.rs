use super::{Entity, TryNewEntity};
use crate::error::*;
use serde::Serialize;
use std::borrow::Cow;
use validator::Validate;

/// Privilege label attached to a voter record, e.g. "voter" or "admin".
/// Opaque to this server; it is read from the database and echoed back to
/// the frontend unchanged.
#[derive(Debug, Clone, Eq, PartialEq, Validate)]
pub struct Role {
  #[validate(length(min = 1))]
  value: String,
}

impl<'a, T: Into<Cow<'a, str>>> TryNewEntity<T> for Role {
  fn new(role: T) -> Result<Self> {
    let value = role.into().to_string();
    let object = Self { value };
    object.validate()?;
    Ok(object)
  }
}

impl Entity for Role {
  fn as_str(&self) -> &str {
    &self.value
  }
  fn into_string(self) -> String {
    self.value
  }
}

impl Serialize for Role {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(self.as_str())
  }
}
