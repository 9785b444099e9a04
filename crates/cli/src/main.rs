//! # Parkstat
//!
//! HTTP service serving parking availability history and lookup data.

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use parkstat_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "parkstat")]
#[command(version)]
#[command(about = "Parking availability statistics API")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database URL, overrides the [database] connection fields
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        web_port: cli.port,
        bind_address: cli.bind,
        database_url: cli.database_url,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        timezone = %config.history.timezone,
        "Configuration loaded"
    );

    let pool = bootstrap::init_database(&config.database).await?;

    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&repos, &config.history)?;

    server::start_web_server(&config.server, use_cases.into_app_state()).await
}
