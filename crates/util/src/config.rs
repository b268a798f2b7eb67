use super::*;
use std::path::PathBuf;

/// Runtime configuration read from the environment.
///
/// A `.env` file in the working directory is loaded first when present,
/// so local development does not need exported variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind: String,
    pub db: PathBuf,
    pub model: PathBuf,
    pub pages: PathBuf,
    /// Unknown team names answer 404 instead of an empty frame.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
            db: PathBuf::from(DEFAULT_DB_PATH),
            model: PathBuf::from(DEFAULT_MODEL_PATH),
            pages: PathBuf::from(DEFAULT_PAGES_DIR),
            strict: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to
    /// defaults for absent keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();
        Ok(Self {
            bind: lookup("BIND_ADDR").unwrap_or(base.bind),
            db: lookup("DB_PATH").map(PathBuf::from).unwrap_or(base.db),
            model: lookup("MODEL_PATH").map(PathBuf::from).unwrap_or(base.model),
            pages: lookup("PAGES_DIR").map(PathBuf::from).unwrap_or(base.pages),
            strict: match lookup("STRICT_TEAMS") {
                None => base.strict,
                Some(s) => flag(&s).ok_or_else(|| format!("STRICT_TEAMS: not a boolean: {:?}", s))?,
            },
        })
    }
}

fn flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
