//! Points regression: parse five statistics, run the fitted model.
//!
//! ## Inference
//!
//! - [`Features`] — the single input row, converted from raw text
//! - [`Model`] — JSON model file, loaded fresh per prediction
//! - [`predict_points`] — end-to-end: parse, load, predict, phrase
//!
//! ## Training
//!
//! - [`samples`] / [`fit`] / [`r2`] — least-squares fit from the stats table
mod features;
mod fit;
mod model;

pub use features::*;
pub use fit::*;
pub use model::*;

use nfl_core::*;
use std::path::Path;

/// The user-facing sentence for a raw prediction. The point total is
/// truncated toward zero.
pub fn sentence(points: Points) -> String {
    format!(
        "We predict that {} points will be scored based on these stats",
        points.trunc() as i64
    )
}

/// Parses the inputs, loads the model at `path`, and phrases its output.
///
/// Input is validated before the model is touched, so a bad value is
/// reported even when the model file is missing.
pub fn predict_points(path: &Path, raw: [&str; 5]) -> Result<String, Error> {
    let x = Features::parse(raw)?;
    let model = Model::load(path)?;
    let points = model.predict(&x);
    if !points.is_finite() {
        return Err(Error::Integrity(format!("model produced {}", points)));
    }
    log::debug!("predicted {:.3} points from {:?}", points, x.values());
    Ok(sentence(points))
}
