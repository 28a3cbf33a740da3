mod config;
mod relay;
mod routes;
mod state;

use config::HostConfig;
use relay::GameRelay;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is the normal case.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    let relay = GameRelay::new(&config.game_server_url, config.timeouts)?;
    let game_server = relay.base_url().to_owned();
    let app = routes::app(state::AppState::new(relay), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(
        port = config.port,
        game_server = %game_server,
        static_dir = %config.static_dir.display(),
        "connect4 host listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
