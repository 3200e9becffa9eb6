pub mod apis;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod log;
pub mod state;
pub mod table;

use crate::{
  apis::{health_check, login},
  state::AppState,
};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Router over the whole HTTP surface. Shared between the binary and the
/// end-to-end tests so both drive the same routes.
pub fn app_router(shared_state: Arc<AppState>) -> Router {
  Router::new()
    .route("/", get(health_check))
    .route("/login", get(login))
    .with_state(shared_state)
}
