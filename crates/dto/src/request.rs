use serde::Deserialize;

/// Raw path segments of `/ml/points/{stat1}/.../{stat5}`.
///
/// Kept as text so conversion failures can be reported per field.
#[derive(Debug, Clone, Deserialize)]
pub struct Stats {
    pub stat1: String,
    pub stat2: String,
    pub stat3: String,
    pub stat4: String,
    pub stat5: String,
}

impl Stats {
    pub fn as_array(&self) -> [&str; 5] {
        [
            self.stat1.as_str(),
            self.stat2.as_str(),
            self.stat3.as_str(),
            self.stat4.as_str(),
            self.stat5.as_str(),
        ]
    }
}
