//! Opponent prediction for repeated rock-paper-scissors.
//!
//! A matchup is a long sequence of simultaneous rounds against the same
//! adversary. Every round we look at what has happened so far and try to
//! recognize how the other side is choosing its moves. If we can predict
//! their next move, we play the move that beats it. If we can't, we play
//! uniformly at random, which is unexploitable.
//!
//! ## Layers
//!
//! - [`gameplay`]: [`Move`], [`Turn`] and the append-only [`History`]
//! - [`detect`]: stateless pattern detectors, each `History -> Option<Move>`
//! - [`strategy`]: [`Settings`] plus the ordered [`Pipeline`] with its random fallback
//! - [`players`]: the [`Bot`] contract, the predicting [`Robot`] and a handful of baseline opponents
//! - [`arena`]: a local harness for matchups and round-robin tournaments
pub mod arena;
pub mod detect;
pub mod gameplay;
pub mod players;
pub mod strategy;

pub use arena::*;
pub use detect::*;
pub use gameplay::*;
pub use players::*;
pub use strategy::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Reward for a single round, and running profit over a matchup.
pub type Payoff = i32;
/// Remaining time budget handed to a bot by the harness, in seconds.
pub type Clock = f64;
/// Empirical frequencies and detector thresholds.
pub type Probability = f64;

// ============================================================================
// PIPELINE PARAMETERS
// ============================================================================
/// Cumulative profit below which every detector is bypassed.
pub const LOSS_THRESHOLD: Payoff = -20;
/// Rounds required before constant, cycle, repetition and bias detectors speak.
pub const PATTERN_MINIMUM: usize = 5;
/// Rounds required before copycat and reactive-counter detectors speak.
pub const REACTIVE_MINIMUM: usize = 2;
/// Trailing rounds inspected by the constant-play detector.
pub const CONSTANT_WINDOW: usize = 5;
/// Mode frequency that must be strictly exceeded to call the opponent biased.
pub const BIAS_THRESHOLD: Probability = 0.4;

// ============================================================================
// EXACT REPETITION WINDOWS
// Longer matches are tried before the bias detector, shorter ones after it.
// ============================================================================
/// Shortest window of the high-confidence repetition search.
pub const LONG_WINDOW_MIN: usize = 8;
/// Longest window of the high-confidence repetition search.
pub const LONG_WINDOW_MAX: usize = 20;
/// Shortest window of the fallback repetition search.
pub const SHORT_WINDOW_MIN: usize = 3;
/// Longest window of the fallback repetition search.
pub const SHORT_WINDOW_MAX: usize = 7;

// ============================================================================
// HARNESS
// ============================================================================
/// Rounds per matchup.
pub const MATCH_ROUNDS: usize = 1000;
/// Starting time budget per bot per matchup, in seconds.
pub const MATCH_CLOCK: Clock = 30.0;
/// Chips exchanged for a decisive round.
pub const ROUND_STAKE: Payoff = 1;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to `logs/<unix-time>.log` when `file` is set, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log(file: bool) -> anyhow::Result<()> {
    use anyhow::Context;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![term];
    if file {
        std::fs::create_dir_all("logs").context("create logs directory")?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .context("time moves slow")?
            .as_secs();
        let path = format!("logs/{}.log", time);
        let sink = std::fs::File::create(&path).with_context(|| format!("create {}", path))?;
        loggers.push(simplelog::WriteLogger::new(log::LevelFilter::Debug, config, sink));
    }
    simplelog::CombinedLogger::init(loggers).context("initialize logger")
}
