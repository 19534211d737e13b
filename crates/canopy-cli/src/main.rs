//! Canopy CLI Application

mod cli;

use clap::Parser as _;
use cli::{Cli, Commands, VerifyCommands};

fn init_tracing() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_target(false)
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize tracing: {:?}", e))?;

    Ok(())
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> eyre::Result<()> {
    // Load .env file (fails silently if not found)
    let _ = dotenvy::dotenv();

    init_tracing()?;

    let cli = Cli::parse();

    let res = match cli.command {
        Commands::Root { args } => {
            canopy_sdk::commands::build_tree_snapshot(args.tree.into(), args.snapshot_out)
                .await
                .map(|_| ())
        }
        Commands::Prove { args } => {
            canopy_sdk::commands::generate_proofs(args.tree.into(), args.targets, args.proofs_out)
                .await
                .map(|_| ())
        }
        Commands::Verify { command } => match command {
            VerifyCommands::Bundle { args } => {
                canopy_sdk::commands::verify_proofs(args.proofs_in, args.expected_root)
                    .await
                    .map(|report| {
                        tracing::info!(
                            verified = report.verified,
                            root = %report.root,
                            "All proofs are VALID"
                        );
                    })
            }
            VerifyCommands::Single { args } => canopy_sdk::commands::verify_single(
                args.hash,
                &args.root,
                &args.element,
                &args.proof.0,
            )
            .and_then(|valid| {
                eyre::ensure!(valid, "Proof does not reproduce root {}", args.root);
                Ok(())
            }),
        },
        Commands::Schema => canopy_sdk::commands::output_schemas(),
    };

    if let Err(e) = res {
        tracing::error!("Error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
