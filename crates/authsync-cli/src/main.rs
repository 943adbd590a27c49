use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "authsync",
    version,
    about = "Provision permissions, roles and groups against an authorization service"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reconcile a manifest against the remote service, creating whatever
    /// is missing and wiring role permissions and group nesting.
    Provision(commands::provision::ProvisionArgs),

    /// Parse a manifest and report what it declares. No remote calls.
    Validate {
        /// Path to the manifest file (.json, .yaml or .yml)
        manifest: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Provision(args) => commands::provision::run(args).await?,
        Command::Validate { manifest } => commands::validate::run(&manifest)?,
    }

    Ok(())
}
