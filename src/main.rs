use std::process::ExitCode;

use clap::{Parser, Subcommand};

use apisum::commands;

#[derive(Parser)]
#[command(name = "apisum", about = "Condensed API summary tables for Python packages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print summary rows (name, signature, first-sentence summary) for
    /// the given dotted names
    Table {
        /// Dotted names to summarize; a leading `~` shortens the display
        /// name to the last segment
        names: Vec<String>,
        /// Current-module prefix context
        #[arg(long)]
        module: Option<String>,
        /// Current-class prefix context
        #[arg(long)]
        class: Option<String>,
        /// Emit rows as JSON instead of aligned text
        #[arg(long)]
        json: bool,
    },
    /// Resolve one dotted name and print its canonical location
    Resolve {
        /// Dotted name to resolve
        name: String,
        /// Current-module prefix context
        #[arg(long)]
        module: Option<String>,
        /// Current-class prefix context
        #[arg(long)]
        class: Option<String>,
    },
    /// List every module loadable from the configured search roots
    Modules,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Table {
            names,
            module,
            class,
            json,
        } => commands::cmd_table(&names, module.as_deref(), class.as_deref(), json),
        Commands::Resolve {
            name,
            module,
            class,
        } => commands::cmd_resolve(&name, module.as_deref(), class.as_deref()),
        Commands::Modules => commands::cmd_modules(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Route warnings to stderr; `RUST_LOG` overrides the default level.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
