//! Decision core for a No-Limit Texas Hold'em agent.
//!
//! Given a partially observed table, the crate estimates hero's equity by
//! Monte Carlo simulation, maps that equity onto a discrete action through a
//! context-sensitive threshold model, and audits opponents whose showdown
//! outcomes drift too far from what their equity predicts.
//!
//! ## Subsystems
//!
//! - [`cards`]: Card codec, bit-set hands, deck sampling, 7-card evaluation
//! - [`equity`]: Monte Carlo win/tie estimation against random opponents
//! - [`threshold`]: Street/profile/position aware action selection
//! - [`audit`]: Per-opponent outcome integrity statistics
//! - [`decision`]: The per-cycle orchestrator and its collaborators
//! - [`hosting`]: Remote equity service (requires `server` feature)
pub mod audit;
pub mod cards;
pub mod decision;
pub mod equity;
#[cfg(feature = "server")]
pub mod hosting;
pub mod threshold;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win rates, tie rates, equities, thresholds.
pub type Probability = f64;
/// Pot and stack sizes as read off the table. Fractional amounts are allowed.
pub type Chips = f64;
/// Combined equity metric, `win + tie / 2`.
pub type Score = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// EQUITY SIMULATION
// ============================================================================
/// Default Monte Carlo iterations per decision.
pub const SIMULATIONS: usize = 3000;
/// Upper bound on iterations accepted from remote callers.
pub const MAX_SIMULATIONS: usize = 100_000;
/// Default number of simulated opponents.
pub const OPPONENTS: usize = 1;

// ============================================================================
// OUTCOME AUDITING
// Thresholds are hand tuned. Keep them independent of the selector constants.
// ============================================================================
/// Minimum all-in samples before a player can be flagged.
pub const AUDIT_MIN_SAMPLES: usize = 25;
/// z-score at or above which a player is flagged.
pub const AUDIT_Z_THRESHOLD: f64 = 3.0;
/// Samples retained per player in memory. Oldest are dropped first.
pub const AUDIT_RETENTION: usize = 2000;
/// Samples per player written by a default export.
pub const AUDIT_EXPORT_SAMPLES: usize = 500;
/// Schema version of the persisted auditor payload.
pub const AUDIT_STATE_VERSION: u32 = 1;

// ============================================================================
// MEMORY KEYS
// ============================================================================
/// Slot holding the most recent decision record.
pub const KEY_DECISION: &str = "last_decision";
/// Slot holding dead cards remembered across cycles of the current hand.
pub const KEY_DEAD_CARDS: &str = "dead_cards";
/// Slot holding hero's cards of the hand the dead-card memory belongs to.
pub const KEY_HERO_CARDS: &str = "dead_cards_hand";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Exit immediately on Ctrl-C.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

/// Milliseconds since the Unix epoch. Zero if the clock is before 1970.
pub fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
