use clap::Parser;
use skyscan_core::config::Config;
use skyscan_feeds::OpenSkyClient;
use skyscan_web::AppState;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skyscan", about = "Live aircraft by origin country inside a bounding box")]
struct Cli {
    /// TOML file layered over the built-in defaults.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Listen address; overrides `server.host` and `HOST`.
    #[arg(long)]
    host: Option<String>,

    /// Listen port; overrides `server.port` and `PORT`.
    #[arg(long)]
    port: Option<u16>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let client = OpenSkyClient::from_config(&config.upstream)?;
    let addr = config.server.addr();
    tracing::info!(
        upstream = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout_secs,
        admission = %config.pipeline.admission,
        country = %config.query.country,
        "skyscan configured"
    );

    let app = skyscan_web::router(AppState::new(config, client));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
