use anyhow::Context;
use clap::{Parser, Subcommand};
use hall_kernel::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "hall-cli", version, about = "Hall booking service command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve {
        /// Address to bind, overriding configuration
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overriding configuration and PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the merged OpenAPI document
    Openapi,
    /// Print the effective configuration
    Config,
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().with_context(|| "failed to load settings")?;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            hall_telemetry::init(&settings.telemetry)?;
            tracing::info!(
                env = ?settings.environment,
                address = %settings.server.bind_address(),
                "hall-cli serve"
            );
            hall_booking::run(settings).await
        }
        Command::Openapi => {
            let registry = hall_booking::build_registry()?;
            print_json(&hall_http::router::merged_openapi(&registry))
        }
        Command::Config => print_json(&settings),
    }
}
