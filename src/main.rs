use anyhow::Result;
use todos::commands::Cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "todos=info,tower_http=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    Cli::menu().await
}
