use crate::{
  constants::{DEFAULT_ADDRESS, DEFAULT_PORT},
  error::*,
  state::{AppState, TableState},
  table::MysqlVoterTable,
};
use clap::{command, Arg};
use std::net::SocketAddr;

/// Parse command line options into the shared server state.
///
/// Database connection parameters are deliberately not options here; they
/// come from the MYSQL_* environment variables at request time.
pub fn parse_opts() -> Result<AppState> {
  let _ = include_str!("../../Cargo.toml");

  let options = command!()
    .arg(
      Arg::new("listen_address")
        .short('l')
        .long("listen-address")
        .value_name("ADDRESS")
        .default_value(DEFAULT_ADDRESS)
        .help("Listen address"),
    )
    .arg(
      Arg::new("port")
        .short('p')
        .long("port")
        .value_name("PORT")
        .default_value(DEFAULT_PORT)
        .help("Listen port"),
    );

  let matches = options.get_matches();

  let Some(address) = matches.get_one::<String>("listen_address") else {
    bail!("Listen address must be specified");
  };
  let Some(port) = matches.get_one::<String>("port") else {
    bail!("Port must be specified");
  };
  let listen_socket = format!("{}:{}", address, port).parse::<SocketAddr>()?;

  Ok(AppState {
    listen_socket,
    table: TableState {
      voter: MysqlVoterTable::new(),
    },
  })
}
