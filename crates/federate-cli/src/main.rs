//! Federate CLI - resolve API resources and derive CRDs for federation

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod display;
mod error;
mod exit_codes;

use config::DiscoverySource;
use display::OutputFormat;

#[derive(Parser)]
#[command(name = "federate")]
#[command(author = "Federate Contributors")]
#[command(version)]
#[command(about = "Resolve Kubernetes API resources and derive CRDs for federation", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the kubeconfig file (default: inferred from the environment)
    #[arg(long, global = true)]
    kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use
    #[arg(long, global = true)]
    context: Option<String>,

    /// Resolve against a saved discovery dump instead of a cluster
    #[arg(long, global = true, value_name = "FILE")]
    discovery: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the API resource a name refers to
    Resolve {
        /// Plural, singular, kind or short name (case-insensitive)
        key: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,
    },

    /// Print a CustomResourceDefinition for the API resource a name refers to
    Crd {
        /// Plural, singular, kind or short name (case-insensitive)
        key: String,

        /// Validation schema (YAML or JSON) to attach to the CRD
        #[arg(long)]
        validation: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,
    },
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins over `--debug` when set.
fn init_tracing(debug: bool) {
    let default = if debug {
        "federate=debug,federate_kube=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .init();
}

#[tokio::main]
async fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                exit_codes::USAGE_ERROR
            } else {
                exit_codes::SUCCESS
            };
            std::process::exit(code);
        }
    };

    init_tracing(cli.debug);

    let source = DiscoverySource {
        dump: cli.discovery.as_deref(),
        kubeconfig: cli.kubeconfig.as_deref(),
        context: cli.context.as_deref(),
    };

    let result = match cli.command {
        Commands::Resolve { key, output } => commands::resolve::run(&key, source, output).await,

        Commands::Crd {
            key,
            validation,
            output,
        } => commands::crd::run(&key, validation.as_deref(), source, output).await,
    };

    if let Err(err) = result {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
