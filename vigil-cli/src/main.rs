use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vigil::server::{AppState, ConfigError, HubConfig, ServerConfig, serve};

/// WebRTC signaling relay between a camera and its viewers.
#[derive(Parser, Debug)]
#[command(name = "vigil", version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "VIGIL_BIND", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Directory with the client pages.
    #[arg(long, env = "VIGIL_PUBLIC_DIR", default_value = "public")]
    public_dir: PathBuf,

    /// Route of the signaling WebSocket.
    #[arg(long, env = "VIGIL_WS_PATH", default_value = "/ws")]
    ws_path: String,

    /// Shared secret clients pass as `?token=`.
    #[arg(long, env = "VIGIL_SECRET", hide_env_values = true)]
    secret: Option<String>,

    /// Do not push viewer-count updates to cameras.
    #[arg(long)]
    no_viewer_count: bool,
}

impl Cli {
    fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let secret = self
            .secret
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;

        let config = ServerConfig {
            ws_path: self.ws_path,
            public_dir: self.public_dir,
            auth_token: Some(secret),
            hub: HubConfig {
                viewer_count: !self.no_viewer_count,
                ..Default::default()
            },
        };
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let bind = cli.bind;

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return Err(e).context("Invalid configuration");
        }
    };

    info!("Serving static files from {:?}", config.public_dir);
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind to {}", bind))?;

    serve(listener, state, shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
