use clap::Args;

use crate::config;

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, help = "Port to listen on (overrides PORT)")]
    pub port: Option<u16>,
}

pub async fn handle(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = config::config().clone();
    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting Blog API in {:?} mode", config.environment);
    crate::app::serve(&config).await
}
