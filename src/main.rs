use axum::{serve, Router};
use tokio::net::TcpListener;

use docker_demo_api::AppState;
use docker_demo_api::core::logging::init_tracing;
use docker_demo_api::core::server::{create_app, setup_listener, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    let state: AppState = AppState::from_env()?;

    // build our router
    let app: Router = create_app(state.clone());

    let listener: TcpListener = setup_listener(&state).await?;

    println!("Server listening on: {}", listener.local_addr()?);
    tracing::info!("Environment: {}", state.environment.environment);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
