mod password;
mod role;
mod voter;
mod voter_id;

use crate::error::{Error, Result};

pub use password::Password;
pub use role::Role;
pub use voter::Voter;
pub use voter_id::VoterId;

pub trait Entity
where
  Self: std::marker::Sized,
{
  fn as_str(&self) -> &str;
  fn into_string(self) -> String;
}

pub trait TryNewEntity<T>
where
  Self: std::marker::Sized,
{
  fn new(input: T) -> Result<Self, Error>;
}
