use super::VoterTable;
use crate::{
  constants::*,
  entity::{Entity, Password, Role, TryNewEntity, Voter, VoterId},
  error::VoterLookupError,
};
use async_trait::async_trait;
use sqlx::{
  mysql::{MySqlConnectOptions, MySqlConnection},
  Connection,
};
use std::env;

/// Read-only view of the voters table. No pool is held: every lookup opens
/// one connection, runs one query and closes the connection again, exactly
/// one round trip per login request.
#[derive(Debug, Clone, Default)]
pub struct MysqlVoterTable {}

impl MysqlVoterTable {
  pub fn new() -> Self {
    Self {}
  }
}

#[async_trait]
impl VoterTable for MysqlVoterTable {
  async fn find_by_credentials(
    &self,
    voter_id: &VoterId,
    password: &Password,
  ) -> std::result::Result<Option<Voter>, VoterLookupError> {
    let params = ConnectParams::from_env()?;
    let mut conn = MySqlConnection::connect_with(&params.options())
      .await
      .map_err(VoterLookupError::Connect)?;

    let sql = format!(
      "select voter_id, password, role from {} where voter_id = ? and password = ?",
      VOTER_TABLE_NAME
    );
    let row_opt: Option<VoterRow> = sqlx::query_as(&sql)
      .bind(voter_id.as_str())
      .bind(password.as_str())
      .fetch_optional(&mut conn)
      .await
      .map_err(VoterLookupError::Query)?;

    // Normal-path closure only. Error paths above drop the connection and
    // leave cleanup to the driver.
    conn.close().await.map_err(VoterLookupError::Query)?;

    match row_opt {
      Some(row) => {
        let voter: Voter = row.try_into().map_err(VoterLookupError::MalformedRow)?;
        Ok(Some(voter))
      }
      None => Ok(None),
    }
  }
}

/// MySQL connection parameters, looked up from the environment on every
/// connection attempt. Nothing is cached, so rotated credentials take
/// effect on the next request.
#[derive(Debug, Clone)]
pub struct ConnectParams {
  host: String,
  user: String,
  password: String,
  database: String,
}

impl ConnectParams {
  pub fn from_env() -> std::result::Result<Self, VoterLookupError> {
    Ok(Self {
      host: read_var(MYSQL_HOST_VAR)?,
      user: read_var(MYSQL_USER_VAR)?,
      password: read_var(MYSQL_PASSWORD_VAR)?,
      database: read_var(MYSQL_DB_VAR)?,
    })
  }

  fn options(&self) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
      .host(&self.host)
      .username(&self.user)
      .password(&self.password)
      .database(&self.database)
  }
}

fn read_var(name: &'static str) -> std::result::Result<String, VoterLookupError> {
  env::var(name).map_err(|_| VoterLookupError::MissingParameter(name))
}

#[derive(Debug, sqlx::FromRow)]
struct VoterRow {
  voter_id: String,
  password: String,
  role: String,
}

impl TryInto<Voter> for VoterRow {
  type Error = crate::error::Error;

  fn try_into(self) -> std::result::Result<Voter, Self::Error> {
    Ok(Voter {
      voter_id: VoterId::new(self.voter_id)?,
      password: Password::new(self.password)?,
      role: Role::new(self.role)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn voter_row_converts_when_well_formed() {
    let row = VoterRow {
      voter_id: "V1".to_string(),
      password: "pw1".to_string(),
      role: "voter".to_string(),
    };
    let voter: Voter = row.try_into().unwrap();
    assert_eq!(voter.voter_id(), "V1");
    assert_eq!(voter.role(), "voter");
  }

  #[test]
  fn voter_row_with_empty_role_is_rejected() {
    let row = VoterRow {
      voter_id: "V1".to_string(),
      password: "pw1".to_string(),
      role: String::new(),
    };
    let res: std::result::Result<Voter, _> = row.try_into();
    assert!(res.is_err());
  }

  // Environment variables are process-global, so presence and absence are
  // exercised in a single test to keep it race-free under the parallel
  // test runner.
  #[test]
  fn connect_params_require_all_four_variables() {
    env::remove_var(MYSQL_HOST_VAR);
    env::remove_var(MYSQL_USER_VAR);
    env::remove_var(MYSQL_PASSWORD_VAR);
    env::remove_var(MYSQL_DB_VAR);
    let missing = ConnectParams::from_env();
    assert!(matches!(missing, Err(VoterLookupError::MissingParameter(MYSQL_HOST_VAR))));

    env::set_var(MYSQL_HOST_VAR, "db.example.internal");
    env::set_var(MYSQL_USER_VAR, "voting");
    env::set_var(MYSQL_PASSWORD_VAR, "secret");
    env::set_var(MYSQL_DB_VAR, "election");
    let params = ConnectParams::from_env().unwrap();
    assert_eq!(params.host, "db.example.internal");
    assert_eq!(params.database, "election");
  }
}
