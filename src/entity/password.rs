use super::{Entity, TryNewEntity};
use crate::error::*;
use std::borrow::Cow;
use validator::Validate;

/// Raw voter password as supplied in the query string. The voters table
/// stores these in plaintext and the lookup matches by exact equality, so
/// no hashing happens anywhere in this crate.
#[derive(Clone, Validate)]
pub struct Password {
  #[validate(length(min = 1))]
  value: String,
}

impl<'a, T: Into<Cow<'a, str>>> TryNewEntity<T> for Password {
  fn new(password: T) -> Result<Self> {
    let value = password.into().to_string();
    let object = Self { value };
    object.validate()?;
    Ok(object)
  }
}

impl Entity for Password {
  fn as_str(&self) -> &str {
    &self.value
  }
  fn into_string(self) -> String {
    self.value
  }
}

// Keep the secret out of debug output and logs.
impl std::fmt::Debug for Password {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("Password(<hidden>)")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_nonempty_password() {
    assert!(Password::new("pw1").is_ok());
  }

  #[test]
  fn rejects_empty_password() {
    assert!(Password::new("").is_err());
  }

  #[test]
  fn debug_output_hides_value() {
    let password = Password::new("pw1").unwrap();
    assert_eq!(format!("{:?}", password), "Password(<hidden>)");
  }
}
