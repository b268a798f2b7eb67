use super::*;
use anyhow::Context;
use nfl_core::*;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Current model file format.
pub const MODEL_VERSION: u32 = 1;

/// Per-feature standardization applied before the linear step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl Scaler {
    pub fn apply(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (m, s))| (x - m) / if *s == 0.0 { 1.0 } else { *s })
            .collect()
    }
}

/// A fitted linear points model, stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub version: u32,
    pub target: String,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<Scaler>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl Model {
    /// Reads and validates a model file. Any failure means the prediction
    /// dependency is unavailable.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Unavailable(format!("model {}: {}", path.display(), e)))?;
        let model = serde_json::from_str::<Self>(&raw)
            .map_err(|e| Error::Unavailable(format!("model {}: {}", path.display(), e)))?;
        model.validate()?;
        Ok(model)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serialize model")?;
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))
    }

    /// The model must take exactly [`FEATURES`], in order, with matching
    /// coefficient and scaler widths.
    pub fn validate(&self) -> Result<(), Error> {
        let bad = |why: String| -> Result<(), Error> {
            Err(Error::Unavailable(format!("incompatible model: {}", why)))
        };
        if self.version != MODEL_VERSION {
            return bad(format!("version {} (expected {})", self.version, MODEL_VERSION));
        }
        if self.features.iter().map(String::as_str).ne(feature_names()) {
            return bad(format!("features {:?}", self.features));
        }
        if self.coefficients.len() != FEATURES.len() {
            return bad(format!("{} coefficients", self.coefficients.len()));
        }
        if let Some(scaler) = self.scaler.as_ref() {
            if scaler.mean.len() != FEATURES.len() || scaler.scale.len() != FEATURES.len() {
                return bad("scaler width".to_string());
            }
        }
        Ok(())
    }

    pub fn predict(&self, x: &Features) -> Points {
        let scaled = match self.scaler.as_ref() {
            Some(scaler) => scaler.apply(x.values()),
            None => x.values().to_vec(),
        };
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(scaled.iter())
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn linear() -> Model {
        Model {
            version: MODEL_VERSION,
            target: TARGET.to_string(),
            features: feature_names().into_iter().map(String::from).collect(),
            scaler: None,
            coefficients: vec![10.0, 20.0, 4.0, 4.0, 0.2],
            intercept: 50.0,
        }
    }

    #[test]
    fn predicts_dot_product_plus_intercept() {
        let x = Features::from([0.45, 6.2, 25.0, 18.0, 110.0]);
        assert!((linear().predict(&x) - 372.5).abs() < 1e-9);
    }

    #[test]
    fn scaler_standardizes_and_ignores_zero_scale() {
        let mut model = linear();
        model.coefficients = vec![1.0; 5];
        model.intercept = 0.0;
        model.scaler = Some(Scaler {
            mean: vec![1.0, 1.0, 1.0, 1.0, 1.0],
            scale: vec![2.0, 2.0, 2.0, 2.0, 0.0],
        });
        let x = Features::from([3.0, 3.0, 3.0, 3.0, 3.0]);
        assert!((model.predict(&x) - 6.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_wrong_features() {
        let mut model = linear();
        model.features.swap(0, 1);
        assert!(matches!(model.validate(), Err(Error::Unavailable(_))));
    }

    #[test]
    fn rejects_wrong_width() {
        let mut model = linear();
        model.coefficients.pop();
        assert!(model.validate().is_err());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Model::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Unavailable(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("points.json");
        linear().save(&path).unwrap();
        assert_eq!(Model::load(&path).unwrap(), linear());
    }

    #[test]
    fn garbage_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.json");
        std::fs::write(&path, b"\x80\x04pickle").unwrap();
        assert!(matches!(Model::load(&path), Err(Error::Unavailable(_))));
    }
}
