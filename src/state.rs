use crate::table::MysqlVoterTable;
use std::net::SocketAddr;

pub struct TableState {
  pub voter: MysqlVoterTable,
}

/// State shared by all handlers. Holds no per-request resources; every
/// login opens and releases its own database connection.
pub struct AppState {
  pub listen_socket: SocketAddr,
  pub table: TableState,
}
