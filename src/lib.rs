//! Texas Hold'em rules-and-decision engine.
//!
//! ## Modules
//!
//! - [`cards`]: Cards, decks, and hand evaluation (5-card ranking, best 5-of-7)
//! - [`gameplay`]: Players, game state, side pots, betting rounds, showdown
//! - [`equity`]: Monte Carlo win probability estimation
//! - [`players`]: Heuristic bots that plug into the betting round
pub mod cards;
pub mod equity;
pub mod gameplay;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets, and pot amounts.
pub type Chips = u32;
/// Stable player identifier, equal to the seat index.
pub type PlayerId = usize;
/// Win rates, equities, and bot propensities.
pub type Probability = f32;

// ============================================================================
// TABLE DEFAULTS
// ============================================================================
/// Opponents seated against the hero by default.
pub const DEFAULT_NUM_OPPONENTS: usize = 2;
/// Starting stack for every player.
pub const DEFAULT_STARTING_STACK: Chips = 1000;
/// Big blind amount.
pub const DEFAULT_BIG_BLIND: Chips = 10;
/// Small blind amount.
pub const DEFAULT_SMALL_BLIND: Chips = 5;
/// Largest table the dealer will seat.
pub const MAX_PLAYERS: usize = 10;
/// Preset used when a bot type is requested by default.
pub const DEFAULT_BOT_TYPE: &str = "TAG";

// ============================================================================
// MONTE CARLO
// ============================================================================
/// Simulations per equity estimate during gameplay.
pub const NUM_SIMULATIONS: usize = 5000;
/// Simulations per equity estimate for offline analysis.
pub const NUM_SIMULATIONS_ANALYSIS: usize = 10000;
/// Simulations per equity estimate inside a bot decision.
pub const BOT_SIMULATIONS: usize = 1000;
/// Trials per independently seeded batch. Fixing this keeps seeded results
/// identical no matter how many threads rayon schedules.
pub const SIMULATION_BATCH: usize = 250;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
