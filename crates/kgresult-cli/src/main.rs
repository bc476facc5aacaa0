mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::Result;
use kgresult_core::{Config, ConfigError, Policy};
use tracing_subscriber::EnvFilter;

use commands::RecordType;

#[derive(Parser)]
#[command(name = "kgresult")]
#[command(about = "Encode knowledge-graph query results as JSON", long_about = None)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Re-encode a JSON array of records under an encoder policy
    Encode {
        /// Encoder policy: "search" or "complex" (default from config)
        #[arg(long)]
        policy: Option<Policy>,

        /// Type of the records in the input
        #[arg(long, value_enum, default_value_t = RecordType::SearchResult)]
        kind: RecordType,

        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Validate a JSON array of BigNodes and print them
    BigNodes {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Print the default configuration file
    Config,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(cli, Config::load)
}

/// Dispatch a parsed command. Configuration is only loaded by the commands
/// that use it, so `config` works even when the config file is broken.
fn run(cli: Cli, load_config: impl Fn() -> Result<Config, ConfigError>) -> Result<()> {
    match cli.command {
        Commands::Encode { policy, kind, file } => {
            let config = load_config()?;
            let pretty = cli.pretty || config.output.pretty;
            let policy = policy.unwrap_or(config.output.policy);
            tracing::debug!(%policy, ?kind, "encoding records");

            let input = commands::read_input(file.as_deref())?;
            let output = commands::encode(policy, kind, &input)?;
            commands::print_json(&output, pretty)?;
        }
        Commands::BigNodes { file } => {
            let config = load_config()?;
            let pretty = cli.pretty || config.output.pretty;

            let input = commands::read_input(file.as_deref())?;
            let output = commands::big_nodes(&input)?;
            commands::print_json(&output, pretty)?;
        }
        Commands::Config => {
            print!("{}", Config::default_config_string());
        }
    }

    Ok(())
}
