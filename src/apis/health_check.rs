use crate::{constants::HEALTH_CHECK_MESSAGE, log::*};

/// Liveness acknowledgment for the frontend. Never touches the database.
pub async fn health_check() -> &'static str {
  debug!("health_check invoked");
  HEALTH_CHECK_MESSAGE
}
