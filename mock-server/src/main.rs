use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Matches the size of the public placeholder data set.
const DEFAULT_SEED: u64 = 200;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let seed = seed_count(std::env::var("SEED_TODOS").ok());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, seed, "listening");
    mock_server::run(listener, mock_server::seed(seed)).await
}

/// Number of todos to seed from `SEED_TODOS`; unset or unparsable falls back
/// to the default.
fn seed_count(value: Option<String>) -> u64 {
    let Some(value) = value else {
        return DEFAULT_SEED;
    };
    match value.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            warn!(%value, default = DEFAULT_SEED, "SEED_TODOS is not a number, using the default");
            DEFAULT_SEED
        }
    }
}
