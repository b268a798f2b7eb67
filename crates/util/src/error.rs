/// Failures surfaced by the query and prediction layers.
///
/// Each variant maps onto one HTTP status in the server crate; nothing is
/// retried since every operation is a single synchronous read.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Requested entity does not exist.
    NotFound(String),
    /// Caller-supplied input could not be converted.
    Validation { field: String, value: String },
    /// Database file or model file is missing or incompatible.
    Unavailable(String),
    /// Stored data violates an expectation (duplicate index, NaN output).
    Integrity(String),
    /// Underlying SQLite failure.
    Database(String),
}

impl Error {
    pub fn validation(field: &str, value: &str) -> Self {
        Self::Validation {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
    pub fn database(e: impl std::fmt::Display) -> Self {
        Self::Database(e.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(s) => write!(f, "not found: {}", s),
            Self::Validation { field, value } => {
                write!(f, "invalid value for {}: {:?}", field, value)
            }
            Self::Unavailable(s) => write!(f, "dependency unavailable: {}", s),
            Self::Integrity(s) => write!(f, "data integrity: {}", s),
            Self::Database(s) => write!(f, "database error: {}", s),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_names_field_and_value() {
        let e = Error::validation("passing_touchdowns", "ten");
        assert_eq!(
            e.to_string(),
            "invalid value for passing_touchdowns: \"ten\""
        );
    }

    #[test]
    fn database_wraps_display() {
        let e = Error::database("disk I/O error");
        assert_eq!(e, Error::Database("disk I/O error".to_string()));
    }
}
