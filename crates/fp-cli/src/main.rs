//! CLI frontend for the FatePick randomization tools.

mod commands;
mod input;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::ExportTarget;

#[derive(Parser)]
#[command(
    name = "fatepick",
    about = "FatePick: fair random picks, teams and topic allocation",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw one random winner from a list
    Pick {
        /// Entries to draw from (in addition to --file)
        entries: Vec<String>,

        /// Read entries from a file, one per line ("-" for stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Skip the shuffling animation
        #[arg(long)]
        no_spin: bool,

        /// RNG seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Shuffle participants into teams
    Teams {
        /// Participant names (in addition to --file)
        entries: Vec<String>,

        /// Read participants from a file, one per line ("-" for stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Maximum members per team (1-15)
        #[arg(short = 's', long, default_value = "4")]
        team_size: usize,

        /// RNG seed for reproducible teams
        #[arg(long)]
        seed: Option<u64>,

        /// Export format: json, csv, markdown, html
        #[arg(short, long)]
        export: Option<String>,

        /// Output file for the export (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Assign a topic to each participant
    Topics {
        /// File with participant names, one per line
        #[arg(short, long)]
        participants: PathBuf,

        /// File with topics, one per line
        #[arg(short, long)]
        topics: PathBuf,

        /// RNG seed for a reproducible allocation
        #[arg(long)]
        seed: Option<u64>,

        /// Export format: json, csv, markdown, html
        #[arg(short, long)]
        export: Option<String>,

        /// Output file for the export (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Form teams and assign each team a topic
    TeamTopics {
        /// File with participant names, one per line
        #[arg(short, long)]
        participants: PathBuf,

        /// File with topics, one per line
        #[arg(short, long)]
        topics: PathBuf,

        /// Maximum members per team (1-10)
        #[arg(short = 's', long, default_value = "4")]
        team_size: usize,

        /// RNG seed for a reproducible allocation
        #[arg(long)]
        seed: Option<u64>,

        /// Export format: json, csv, markdown, html
        #[arg(short, long)]
        export: Option<String>,

        /// Output file for the export (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Pick {
            entries,
            file,
            no_spin,
            seed,
        } => commands::pick::run(&entries, file.as_deref(), !no_spin, seed),
        Commands::Teams {
            entries,
            file,
            team_size,
            seed,
            export,
            output,
        } => commands::teams::run(
            &entries,
            file.as_deref(),
            team_size,
            seed,
            &ExportTarget {
                format: export.as_deref(),
                output: output.as_deref(),
            },
        ),
        Commands::Topics {
            participants,
            topics,
            seed,
            export,
            output,
        } => commands::topics::run(
            &participants,
            &topics,
            seed,
            &ExportTarget {
                format: export.as_deref(),
                output: output.as_deref(),
            },
        ),
        Commands::TeamTopics {
            participants,
            topics,
            team_size,
            seed,
            export,
            output,
        } => commands::team_topics::run(
            &participants,
            &topics,
            team_size,
            seed,
            &ExportTarget {
                format: export.as_deref(),
                output: output.as_deref(),
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
