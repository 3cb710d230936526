//! CLI frontend for the ESO build randomizer.

mod commands;
mod display;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "esr",
    about = "ESO Build Randomizer: random subclassing builds for Elder Scrolls Online",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log each generation step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one or more random builds
    Generate {
        /// Number of builds to generate
        #[arg(short, long, default_value = "3")]
        number: usize,

        /// Generate builds for this class only (case-insensitive)
        #[arg(short, long)]
        class: Option<String>,

        /// Number of skill lines to replace: 1 or 2 (default: random)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
        lines: Option<u8>,

        /// RNG seed for reproducible builds
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the builds as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every class and its skill lines
    Classes,

    /// Menu-driven mode: roll builds one at a time or in batches
    Interactive {
        /// RNG seed for reproducible builds
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::debug!("esr v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Generate {
            number,
            class,
            lines,
            seed,
            json,
        } => commands::generate::run(number, class.as_deref(), lines, seed, json),
        Commands::Classes => commands::classes::run(),
        Commands::Interactive { seed } => commands::interactive::run(seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
