//! Explicit, versioned definition of the team statistics table.
//!
//! The application never reflects columns from the database file. Instead
//! the layout below is compiled in and checked against the file at startup
//! (see [`Check`](crate::Check)).
use nfl_core::*;

/// Bumped whenever [`COLUMNS`] changes.
pub const SCHEMA_VERSION: u32 = 1;

/// SQLite type affinity, derived from a declared column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affinity {
    Integer,
    Text,
    Blob,
    Real,
    Numeric,
}

impl Affinity {
    /// Applies SQLite's affinity rules (section 3.1 of the datatype docs)
    /// to a declared type such as `BIGINT` or `FLOAT`.
    pub fn of(declared: &str) -> Self {
        let t = declared.to_ascii_uppercase();
        if t.contains("INT") {
            Self::Integer
        } else if t.contains("CHAR") || t.contains("CLOB") || t.contains("TEXT") {
            Self::Text
        } else if t.contains("BLOB") || t.trim().is_empty() {
            Self::Blob
        } else if t.contains("REAL") || t.contains("FLOA") || t.contains("DOUB") {
            Self::Real
        } else {
            Self::Numeric
        }
    }

    /// Whether a stored column with affinity `other` satisfies `self`.
    /// Numeric columns accept any of the three number affinities.
    pub fn admits(self, other: Self) -> bool {
        match self {
            Self::Numeric => matches!(other, Self::Integer | Self::Real | Self::Numeric),
            _ => self == other,
        }
    }

    fn ddl(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
            Self::Real => "REAL",
            Self::Numeric => "NUMERIC",
        }
    }
}

/// One declared column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub affinity: Affinity,
}

const fn stat(name: &'static str) -> Column {
    Column {
        name,
        affinity: Affinity::Numeric,
    }
}

#[rustfmt::skip]
pub const COLUMNS: [Column; 45] = [
    Column { name: TEAM_ID,    affinity: Affinity::Integer },
    Column { name: IDENTIFIER, affinity: Affinity::Text    },
    stat("first_downs"),
    stat("first_downs_by_penalty"),
    stat("third_down_percentage"),
    stat("fourth_down_percentage"),
    stat("average_interception_yards"),
    stat("average_kickoff_return_yards"),
    stat("average_punt_return_yards"),
    stat("interceptions"),
    stat("net_average_punt_yards"),
    stat("net_passing_yards"),
    stat("net_passing_yards_per_game"),
    stat("passing_first_downs"),
    stat("passing_touchdowns"),
    stat("rushing_first_downs"),
    stat("rushing_attempts"),
    stat("rushing_touchdowns"),
    stat("rushing_yards"),
    stat("rushing_yards_per_game"),
    stat("total_offensive_plays"),
    stat("total_points"),
    stat("total_points_per_game"),
    stat("total_touchdowns"),
    stat("total_offensive_yards"),
    stat("yards_per_game"),
    stat("yards_per_pass_attempt"),
    stat("yards_per_rush_attempt"),
    stat("completed_passes"),
    stat("attempted_passes"),
    stat("field_goals_completed"),
    stat("field_goals_attempted"),
    stat("total_fumbles"),
    stat("defensive_interception"),
    stat("yards_after_interception"),
    stat("total_kickoffs_received"),
    stat("yards_off_kickoff_received"),
    stat("total_punts_received"),
    stat("yards_off_punts_received"),
    stat("total_punts_kicked"),
    stat("total_punt_yards"),
    stat("total_defensive_sacks"),
    stat("yards_lost_from_sacks"),
    stat("total_penalties"),
    stat("total_yards_penalized"),
];

/// Schema metadata for a table.
///
/// Pure description, no I/O. Statements are generated from the declared
/// column list so they can never drift from it.
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns the declared columns in order.
    fn columns() -> &'static [Column];
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL for the declared layout.
    fn creates() -> String {
        let cols = Self::columns()
            .iter()
            .map(|c| format!("\"{}\" {}", c.name, c.affinity.ddl()))
            .collect::<Vec<_>>()
            .join(",\n    ");
        format!("CREATE TABLE IF NOT EXISTS {} (\n    {}\n);", Self::name(), cols)
    }
    /// Returns a `SELECT` of every declared column, in order.
    fn selects() -> String {
        let cols = Self::columns()
            .iter()
            .map(|c| format!("\"{}\"", c.name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("SELECT {} FROM {}", cols, Self::name())
    }
    /// Names of the declared columns.
    fn names() -> Vec<&'static str> {
        Self::columns().iter().map(|c| c.name).collect()
    }
}

/// Marker for the `cleaned_team_stats` table.
pub struct TeamStats;

impl Schema for TeamStats {
    fn name() -> &'static str {
        TEAM_STATS
    }
    fn columns() -> &'static [Column] {
        &COLUMNS
    }
}
