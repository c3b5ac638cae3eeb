mod about;
mod plan;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tactik",
    about = "Study planner: ranks tomorrow's subjects by schedule and difficulty"
)]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank subjects from a timetable file (one line per day, comma-separated)
    Plan {
        /// Timetable file path
        file: PathBuf,

        /// 0-based anchor day index (default: today's weekday, 0 = Sunday)
        #[arg(long)]
        anchor: Option<usize>,

        /// Difficulty rating as NAME=1..10, repeatable; subjects without a
        /// flag are prompted for on the terminal
        #[arg(long = "difficulty", value_name = "NAME=RATING")]
        difficulties: Vec<String>,

        /// Print the ranking as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Type a timetable on the terminal, then rank it
    Interactive {
        /// 0-based anchor day index (default: today's weekday, 0 = Sunday)
        #[arg(long)]
        anchor: Option<usize>,

        /// Print the ranking as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// What tactik is and who it is for
    About,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Plan {
            file,
            anchor,
            difficulties,
            json,
        } => plan::run_file(file, *anchor, difficulties, *json),
        Commands::Interactive { anchor, json } => plan::run_interactive(*anchor, *json),
        Commands::About => {
            about::print();
            Ok(())
        }
    }
}
