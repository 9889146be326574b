mod config;
mod input;
mod output;

use clap::Parser;
use clap::error::ErrorKind;
use rankboard_core::constants::{DEFAULT_MIN_PLAYS, DEFAULT_RANKING_THRESHOLD};
use rankboard_core::{AggregateMode, LeaderboardError, RankingOptions, run_leaderboard};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::RankboardConfig;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "rankboard",
    version,
    about = "Compute a contest leaderboard from entry and score logs",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    rank: RankArgs,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Create a default config file at ~/.config/rankboard/config.toml
    Init {
        /// Write the config here instead of the default location
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct RankArgs {
    /// [highscore|average] <entry_log> <score_log>
    ///
    /// An entry log literally named `init` must be written as `./init`.
    #[arg(value_name = "ARGS")]
    positionals: Vec<String>,

    /// Highest rank to print; players tied at that rank are all printed
    #[arg(long)]
    top: Option<usize>,

    /// Minimum plays to appear in the average ranking
    #[arg(long)]
    min_plays: Option<u64>,

    /// Path to config file (default: ~/.config/rankboard/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON instead of comma-separated rows
    #[arg(long)]
    json: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// What the positional arguments resolve to.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    mode: AggregateMode,
    entry_log: PathBuf,
    score_log: PathBuf,
}

/// `<entry> <score>` ranks by highscore; `<mode> <entry> <score>` picks the mode.
fn resolve_positionals(positionals: &[String]) -> Result<Invocation, LeaderboardError> {
    match positionals {
        [entry_log, score_log] => Ok(Invocation {
            mode: AggregateMode::Highscore,
            entry_log: PathBuf::from(entry_log),
            score_log: PathBuf::from(score_log),
        }),
        [mode, entry_log, score_log] => Ok(Invocation {
            mode: mode.parse()?,
            entry_log: PathBuf::from(entry_log),
            score_log: PathBuf::from(score_log),
        }),
        other => Err(LeaderboardError::BadArgumentCount(other.len())),
    }
}

/// Merge CLI flags over config values over built-in defaults.
fn resolve_options(mode: AggregateMode, args: &RankArgs, cfg: &RankboardConfig) -> RankingOptions {
    RankingOptions {
        mode,
        min_plays: args.min_plays.or(cfg.min_plays).unwrap_or(DEFAULT_MIN_PLAYS),
        threshold: args
            .top
            .or(cfg.ranking_threshold)
            .unwrap_or(DEFAULT_RANKING_THRESHOLD),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            std::process::exit(1);
        }
    });

    match cli.command {
        Some(Commands::Init { config: config_override }) => {
            let path = config_override
                .or_else(config::config_path)
                .unwrap_or_else(|| bail("HOME environment variable not set; pass --config"));
            config::create_default_config(&path);
            println!("Created config at {}", path.display());
            println!("Edit it to set your default ranking threshold and minimum plays.");
        }
        None => run_rank(cli.rank),
    }
}

fn run_rank(args: RankArgs) {
    init_logging(args.verbose);

    let invocation = resolve_positionals(&args.positionals).unwrap_or_else(|e| bail(e));

    let entry_log = input::read_log(&invocation.entry_log).unwrap_or_else(|e| bail(e));
    let score_log = input::read_log(&invocation.score_log).unwrap_or_else(|e| bail(e));

    let cfg = match args.config.clone().or_else(config::config_path) {
        Some(path) => {
            log::info!("Using config {}", path.display());
            config::load_config(&path)
        }
        None => RankboardConfig::default(),
    };
    let options = resolve_options(invocation.mode, &args, &cfg);

    log::info!(
        "Ranking by {} (threshold {}, min plays {})",
        options.mode,
        options.threshold,
        options.min_plays,
    );

    let board = run_leaderboard(&entry_log, &score_log, &options).unwrap_or_else(|e| bail(e));

    log::info!(
        "Entry log: {} rows, {} registered players",
        board.entry_rows,
        board.registered_players,
    );
    log::info!(
        "Score log: {} accepted, {} dropped (unknown player), {} dropped (before registration)",
        board.report.accepted,
        board.report.unknown_player,
        board.report.before_registration,
    );
    log::info!(
        "{} players with plays, {} rows emitted",
        board.aggregated_players,
        board.rows.len(),
    );
    let average_filtered_all = options.mode == AggregateMode::Average
        && board.rows.is_empty()
        && board.aggregated_players > 0;
    if average_filtered_all {
        log::warn!(
            "No player has at least {} plays; average ranking is empty",
            options.min_plays,
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if args.json {
        output::write_json(&mut out, &board.rows, options.mode)
    } else {
        output::write_csv(&mut out, &board.rows)
    };
    if let Err(e) = written.and_then(|()| out.flush()) {
        bail(format!("Failed to write ranking: {e}"));
    }
}
