use std::sync::Arc;

use anyhow::Context;

use email_classifier::api;
use email_classifier::classifier::Classifier;
use email_classifier::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env().context("loading server configuration")?;

    eprintln!("📬 Email Classifier v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Listening: http://{}:{}", config.host, config.port);
    if config.cors_origins.is_empty() {
        eprintln!("   CORS: any origin");
    } else {
        eprintln!("   CORS: {}", config.cors_origins.join(", "));
    }

    let classifier = Arc::new(Classifier::new());
    api::serve(&config, classifier)
        .await
        .context("email classifier server stopped")?;

    Ok(())
}
