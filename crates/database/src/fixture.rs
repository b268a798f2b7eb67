//! In-memory database seeded with a handful of teams, for tests.
use super::*;
use rusqlite::Connection;
use rusqlite::params_from_iter;
use rusqlite::types::Value;

/// `(team_id, variable, seed)` for each seeded team.
pub const FIXTURE_TEAMS: [(i64, &str, f64); 6] = [
    (1, "New England", 1.0),
    (2, "Chicago", 2.0),
    (3, "Miami", 3.0),
    (4, "Dallas", 4.0),
    (5, "Green Bay", 5.0),
    (6, "Arizona", 6.0),
];

/// Statistic value for column `j` of a team seeded with `seed`.
pub fn fixture_stat(seed: f64, j: usize) -> f64 {
    seed * 10.0 + j as f64 + (seed * j as f64) % 7.0
}

/// Creates the declared schema in memory and inserts [`FIXTURE_TEAMS`]
/// plus one row whose identifier is NULL.
pub fn fixture() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch(&TeamStats::creates())
        .expect("create fixture table");
    let width = TeamStats::columns().len();
    let marks = vec!["?"; width].join(", ");
    let sql = format!("INSERT INTO {} VALUES ({})", TeamStats::name(), marks);
    let rows = FIXTURE_TEAMS
        .iter()
        .map(|(id, name, seed)| {
            std::iter::once(Value::Integer(*id))
                .chain(std::iter::once(Value::Text(name.to_string())))
                .chain((2..width).map(|j| Value::Real(fixture_stat(*seed, j))))
                .collect::<Vec<_>>()
        })
        .chain(std::iter::once(
            std::iter::once(Value::Integer(99))
                .chain(std::iter::once(Value::Null))
                .chain((2..width).map(|_| Value::Null))
                .collect::<Vec<_>>(),
        ));
    for row in rows {
        conn.execute(&sql, params_from_iter(row))
            .expect("insert fixture row");
    }
    conn
}
