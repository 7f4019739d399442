use std::path::PathBuf;

use clap::Parser;
use pexeso::{Board, Game};
use pexeso_bot::MemoryBot;
use pexeso_cli::{play_console_game, GameConfig, HumanPlayer, Language};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Number of rows and columns of the board
    #[arg(short, long)]
    size: Option<usize>,

    /// How many pairs it takes to win
    #[arg(short, long)]
    winning_score: Option<u32>,

    /// Language of the messages
    #[arg(long, value_enum)]
    language: Option<Language>,

    /// Path to a JSON config file. Command line arguments take precedence over it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(winning_score) = args.winning_score {
        config.winning_score = winning_score;
    }
    if let Some(language) = args.language {
        config.language = language;
    }
    config.validate()?;
    info!(?config);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let board = Board::generate(config.size, &mut rng)?;
    let mut game = Game::new(board, config.winning_score);
    let mut bot = MemoryBot::new(StdRng::seed_from_u64(rng.gen()));
    let mut human = HumanPlayer::new(
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        config.language,
    );

    let result = play_console_game(&mut game, &mut human, &mut bot)?;
    info!(?result);
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    // Dependencies only get to report warnings and errors
    let filter = Targets::new()
        .with_default(level.min(LevelFilter::WARN))
        .with_target("pexeso", level)
        .with_target("pexeso_bot", level)
        .with_target("pexeso_cli", level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
