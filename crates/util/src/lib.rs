//! Core constants, configuration, and runtime helpers for nflstats.
//!
//! This crate provides the foundational pieces shared by every other
//! crate in the workspace: the error taxonomy, environment-driven
//! configuration, and (behind the `server` feature) logging setup.
mod config;
mod error;

pub use config::*;
pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Raw statistic values as stored in the database.
pub type Stat = f64;
/// Predicted point totals before truncation.
pub type Points = f64;

// ============================================================================
// TABLE LAYOUT
// ============================================================================
/// Table holding one row per (team, variable) pair.
pub const TEAM_STATS: &str = "cleaned_team_stats";
/// Identifier column distinguishing teams within the table.
pub const IDENTIFIER: &str = "variable";
/// Numeric team key column.
pub const TEAM_ID: &str = "team_id";
/// Column the points model is trained against.
pub const TARGET: &str = "total_points";

// ============================================================================
// DEFAULTS
// ============================================================================
/// Address the HTTP server binds to when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
/// SQLite file used when `DB_PATH` is unset.
pub const DEFAULT_DB_PATH: &str = "db/cleaned_team_stats.sqlite";
/// Model file used when `MODEL_PATH` is unset.
pub const DEFAULT_MODEL_PATH: &str = "models/points.json";
/// Static page directory used when `PAGES_DIR` is unset.
pub const DEFAULT_PAGES_DIR: &str = "templates";

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

/// Register Ctrl+C handler for immediate termination.
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
