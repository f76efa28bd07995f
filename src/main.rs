use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use harbor_relay::Config;

#[derive(Parser)]
#[command(about = "HTTP relay for enumerating and copying Harbor artifacts")]
struct Cli {
    #[arg(short, long, default_value = "./config.yaml")]
    config_file: PathBuf,

    /// Overrides `listen_address` from the config file.
    #[arg(short, long)]
    listen_address: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .compact()
        .init();

    // load configuration
    let config = Config::from_file(&cli.config_file)?;
    let registry = config.harbor.new_registry()?;
    tracing::info!("relaying registry at {}", registry.base_url());

    let router = harbor_relay::http::router(registry);

    // run HTTP server
    let addr = cli.listen_address.unwrap_or(config.listen_address);
    tracing::info!("listening on {addr}");
    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
