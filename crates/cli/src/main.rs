//! # iterdns
//!
//! Interactive iterative DNS lookup tool: resolves names by walking the
//! root→TLD→authority delegation chain itself against a caller-supplied
//! root server.

mod bootstrap;
mod di;
mod repl;
mod trace;

use clap::Parser;
use iterdns_domain::CliOverrides;

#[derive(Parser)]
#[command(name = "iterdns")]
#[command(version)]
#[command(about = "Iterative DNS lookup against a chosen root server")]
struct Cli {
    /// IP address (dotted form) of the root DNS server to start each search at
    root_server: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Start with verbose tracing enabled
    #[arg(short, long)]
    trace: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        root_server: cli.root_server,
        trace: cli.trace.then_some(true),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    // Transport construction is the one fatal failure mode: exit non-zero
    // before any resolution is attempted.
    let services = di::Services::build(&config).await?;

    println!("Root DNS server is: {}", services.root_server);

    repl::run(&services).await
}
