use crate::entity::Role;
use serde::Serialize;

/// Success body of `GET /login`. Failure bodies carry `success: false` and
/// a fixed message instead of a role; see `LoginError`.
#[derive(Serialize, Debug, Clone)]
pub struct LoginResponse {
  pub success: bool,
  pub role: Role,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::entity::TryNewEntity;

  #[test]
  fn success_body_shape() {
    let response = LoginResponse {
      success: true,
      role: Role::new("admin").unwrap(),
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, serde_json::json!({"success": true, "role": "admin"}));
  }
}
