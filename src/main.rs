use clap::Parser;
use dotenvy::dotenv;
use edupro::cli::{Cli, run};
use edupro_config::PortalConfig;
use edupro_observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let config = PortalConfig::from_env();

    init_tracing(&config.logging);
    let metrics = init_metrics();

    run(cli, config, metrics).await
}
