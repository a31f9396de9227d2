//! CMS page gateway binary.
//!
//! Two explicit entry points share one resolver:
//! - `serve`: run the gateway (fallback rendering + stale-while-revalidate)
//! - `build`: static generation of every known page into a directory
//!
//! `paths` prints the known-paths index for inspection.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use cms_gateway::config::{load_config, GatewayConfig};
use cms_gateway::content::HttpContentClient;
use cms_gateway::observability::{logging, metrics};
use cms_gateway::pages::{PageResolver, Prerenderer};
use cms_gateway::HttpServer;

#[derive(Parser)]
#[command(name = "cms-gateway")]
#[command(version, about = "Serves pages authored in a hosted visual CMS", long_about = None)]
struct Cli {
    /// Path to the gateway configuration file.
    #[arg(short, long, default_value = "gateway.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the gateway server
    Serve,

    /// Statically generate every known page
    Build {
        /// Output directory for generated pages
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the known-paths index
    Paths,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    logging::init(&config.observability.log_filter);

    tracing::info!(
        config = %cli.config.display(),
        api_base = %config.content.api_base,
        model = %config.content.model,
        "Configuration loaded"
    );

    let resolver = build_resolver(&config)?;

    match cli.command {
        Command::Serve => {
            if config.observability.metrics_enabled {
                match config.observability.metrics_address.parse() {
                    Ok(addr) => metrics::init_metrics(addr),
                    Err(e) => {
                        tracing::error!(
                            metrics_address = %config.observability.metrics_address,
                            error = %e,
                            "Failed to parse metrics address"
                        );
                    }
                }
            }

            let listener = TcpListener::bind(&config.listener.bind_address).await?;
            let server = HttpServer::new(config, resolver);
            server.run(listener).await?;
            tracing::info!("Shutdown complete");
        }

        Command::Build { output } => {
            let summary = Prerenderer::new(resolver).build(&output).await?;
            tracing::info!(
                pages = summary.pages,
                not_found = summary.not_found,
                output = %output.display(),
                "Build finished"
            );
        }

        Command::Paths => {
            for path in resolver.known_paths().await? {
                println!("{}", path);
            }
        }
    }

    Ok(())
}

fn build_resolver(config: &GatewayConfig) -> Result<PageResolver, Box<dyn std::error::Error>> {
    let client = HttpContentClient::new(&config.content)?;
    Ok(PageResolver::new(client, config.content.list_limit))
}
