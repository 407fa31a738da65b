/**
 * Task Proxy Entry Point
 *
 * Loads configuration, initializes tracing and serves the task proxy.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = spirited_todo::backend::server::ProxyConfig::load()?;
    tracing::info!("Starting task proxy on {}", config.bind_addr);

    spirited_todo::backend::server::serve(config).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("The task proxy requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin todo-proxy --features ssr");
    std::process::exit(1);
}
