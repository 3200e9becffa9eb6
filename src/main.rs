use std::sync::Arc;
use tokio::runtime::Builder;
use voting_backend::{app_router, config::parse_opts, constants::THREAD_NAME, error::*, log::*, state::AppState};

fn main() -> Result<()> {
  init_logger();

  let mut runtime_builder = Builder::new_multi_thread();
  runtime_builder.enable_all();
  runtime_builder.thread_name(THREAD_NAME);
  let runtime = runtime_builder.build()?;

  runtime.block_on(async {
    match parse_opts() {
      Ok(shared_state) => {
        if let Err(e) = serve(Arc::new(shared_state)).await {
          error!("{e}");
        }
      }
      Err(e) => {
        error!("{e}");
      }
    };
  });

  Ok(())
}

async fn serve(shared_state: Arc<AppState>) -> Result<()> {
  let addr = shared_state.listen_socket;
  let tcp_listener = tokio::net::TcpListener::bind(&addr).await?;
  info!("Starting backend server on http://{}", &addr);
  warn!("Voter passwords are stored and compared in plaintext; see README");

  let server = axum::serve(tcp_listener, app_router(shared_state));

  if let Err(e) = server.await {
    error!("Server is down!: {e}");
  }
  Ok(())
}
