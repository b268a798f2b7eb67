//! Backend Binary
//!
//! Serves pages, statistics, and predictions on BIND_ADDR
//! (default 127.0.0.1:5000). Reads DB_PATH, MODEL_PATH, PAGES_DIR,
//! and STRICT_TEAMS from the environment or a `.env` file.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nfl_core::log();
    nfl_core::kys();
    let config = nfl_core::Config::from_env().map_err(anyhow::Error::msg)?;
    nfl_server::run(config).await
}
