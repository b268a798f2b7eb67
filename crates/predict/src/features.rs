use nfl_core::*;

/// How a raw path segment must be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Float,
    Integer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub name: &'static str,
    pub kind: Kind,
}

/// Inputs the points model expects, in column order.
#[rustfmt::skip]
pub const FEATURES: [Feature; 5] = [
    Feature { name: "third_down_percentage",  kind: Kind::Float   },
    Feature { name: "yards_per_pass_attempt", kind: Kind::Float   },
    Feature { name: "passing_touchdowns",     kind: Kind::Integer },
    Feature { name: "rushing_touchdowns",     kind: Kind::Integer },
    Feature { name: "rushing_yards_per_game", kind: Kind::Integer },
];

pub fn feature_names() -> Vec<&'static str> {
    FEATURES.iter().map(|f| f.name).collect()
}

impl Feature {
    /// Converts one raw value, rejecting anything that is not a finite
    /// number of the expected kind.
    pub fn parse(&self, raw: &str) -> Result<Stat, Error> {
        let text = raw.trim();
        let value = match self.kind {
            Kind::Float => text.parse::<f64>().ok(),
            Kind::Integer => text.parse::<i64>().ok().map(|i| i as f64),
        };
        value
            .filter(|v| v.is_finite())
            .ok_or_else(|| Error::validation(self.name, raw))
    }
}

/// Exactly one input row for the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features([Stat; 5]);

impl Features {
    pub fn parse(raw: [&str; 5]) -> Result<Self, Error> {
        let mut values = [0.0; 5];
        for ((slot, feature), text) in values.iter_mut().zip(FEATURES.iter()).zip(raw) {
            *slot = feature.parse(text)?;
        }
        Ok(Self(values))
    }
    pub fn values(&self) -> &[Stat; 5] {
        &self.0
    }
}

impl From<[Stat; 5]> for Features {
    fn from(values: [Stat; 5]) -> Self {
        Self(values)
    }
}

impl TryFrom<&nfl_dto::Stats> for Features {
    type Error = Error;
    fn try_from(stats: &nfl_dto::Stats) -> Result<Self, Self::Error> {
        Self::parse(stats.as_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_kinds() {
        let x = Features::parse(["0.45", "6.2", "25", "18", "110"]).unwrap();
        assert_eq!(x.values(), &[0.45, 6.2, 25.0, 18.0, 110.0]);
    }

    #[test]
    fn trims_whitespace() {
        let x = Features::parse([" 0.5", "7 ", "+3", "2", "99"]).unwrap();
        assert_eq!(x.values()[2], 3.0);
    }

    #[test]
    fn integer_fields_reject_decimals() {
        let err = Features::parse(["0.45", "6.2", "25.5", "18", "110"]).unwrap_err();
        assert_eq!(err, Error::validation("passing_touchdowns", "25.5"));
    }

    #[test]
    fn first_bad_field_is_reported() {
        let err = Features::parse(["abc", "x", "25", "18", "110"]).unwrap_err();
        assert_eq!(err, Error::validation("third_down_percentage", "abc"));
    }

    #[test]
    fn non_finite_floats_rejected() {
        assert!(Features::parse(["NaN", "6.2", "25", "18", "110"]).is_err());
        assert!(Features::parse(["0.4", "inf", "25", "18", "110"]).is_err());
    }
}
