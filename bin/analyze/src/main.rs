//! Analysis Binary
//!
//! Opens DB_PATH and reads queries from stdin. Type `help` for commands.

fn main() -> anyhow::Result<()> {
    nfl_core::log();
    let config = nfl_core::Config::from_env().map_err(anyhow::Error::msg)?;
    let db = nfl_database::db(&config.db)?;
    nfl_stats::CLI::from(nfl_stats::API::from(db)).run()
}
