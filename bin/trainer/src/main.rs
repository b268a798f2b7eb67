//! Trainer Binary
//!
//! Reads every row of DB_PATH, fits the linear points model, and writes
//! it to MODEL_PATH.

fn main() -> anyhow::Result<()> {
    nfl_core::log();
    let config = nfl_core::Config::from_env().map_err(anyhow::Error::msg)?;
    let db = nfl_database::db(&config.db)?;
    let frame = nfl_stats::API::from(db).all()?;
    let samples = nfl_predict::samples(&frame);
    log::info!("training on {} of {} rows", samples.len(), frame.len());
    let model = nfl_predict::fit(&samples)?;
    log::info!("r² = {:.4}", nfl_predict::r2(&model, &samples));
    model.save(&config.model)?;
    log::info!("model written to {}", config.model.display());
    Ok(())
}
