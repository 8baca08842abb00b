//! Flauta CLI - command-line interface for the flauta placement solver.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flauta")]
#[command(author, version, about = "Flute bore and tone-hole placement CLI", long_about = None)]
struct Cli {
    /// Enable verbose tracing output on stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a design into manufacturable hole positions
    Solve(commands::solve::SolveArgs),

    /// List available designs, or show one as TOML
    Designs(commands::designs::DesignsArgs),

    /// Derive tone-hole frequencies from a fundamental
    Notes(commands::notes::NotesArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Solve(args) => commands::solve::run(args),
        Commands::Designs(args) => commands::designs::run(args),
        Commands::Notes(args) => commands::notes::run(args),
    }
}
