use nfl_core::*;
use nfl_database::*;
use nfl_dto::*;
use rusqlite::Connection;
use rusqlite::types::ValueRef;
use std::sync::MutexGuard;

/// Lowercases and strips every whitespace character, so that
/// `" New  England"` and `"newengland"` compare equal.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn cell(value: ValueRef<'_>) -> Cell {
    match value {
        ValueRef::Null => Cell::Null,
        ValueRef::Integer(i) => Cell::Integer(i),
        ValueRef::Real(r) => Cell::Real(r),
        ValueRef::Text(t) | ValueRef::Blob(t) => Cell::Text(String::from_utf8_lossy(t).into_owned()),
    }
}

/// Index label for a row, derived from its identifier cell.
fn label(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => s.clone(),
        Cell::Integer(i) => i.to_string(),
        Cell::Real(r) => r.to_string(),
        Cell::Null => "null".to_string(),
    }
}

/// Read-only queries over the team statistics table.
pub struct API(Shared);

impl From<Shared> for API {
    fn from(db: Shared) -> Self {
        Self(db)
    }
}

impl From<Connection> for API {
    fn from(conn: Connection) -> Self {
        Self(std::sync::Arc::new(std::sync::Mutex::new(conn)))
    }
}

impl API {
    pub fn new(db: Shared) -> Self {
        Self(db)
    }
    fn conn(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.0
            .lock()
            .map_err(|_| Error::Unavailable("database lock poisoned".into()))
    }

    /// Whether the connection still answers a trivial query.
    pub fn ping(&self) -> Result<(), Error> {
        self.conn()?
            .query_row("SELECT 1", [], |_| Ok(()))
            .map_err(Error::database)
    }

    /// Every declared column of every row, in table order.
    fn scan(&self) -> Result<Vec<Vec<Cell>>, Error> {
        let conn = self.conn()?;
        let width = TeamStats::columns().len();
        let mut stmt = conn.prepare(&TeamStats::selects()).map_err(Error::database)?;
        let mut rows = stmt.query([]).map_err(Error::database)?;
        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(Error::database)? {
            let cells = (0..width)
                .map(|j| row.get_ref(j).map(cell))
                .collect::<Result<Vec<_>, _>>()
                .map_err(Error::database)?;
            out.push(cells);
        }
        Ok(out)
    }

    /// Builds a frame keyed by identifier, rejecting duplicate keys.
    fn frame(rows: Vec<Vec<Cell>>) -> Result<Frame, Error> {
        let id = identifier();
        let labels = rows.iter().map(|row| label(&row[id])).collect::<Vec<_>>();
        let dupes = Frame::duplicates(labels.iter().map(String::as_str));
        if !dupes.is_empty() {
            return Err(Error::Integrity(format!(
                "duplicate {} values: {}",
                IDENTIFIER,
                dupes.join(", ")
            )));
        }
        let mut frame = Frame::new(TeamStats::names());
        for (key, row) in labels.into_iter().zip(rows) {
            frame.push(key, row);
        }
        Ok(frame)
    }
}

fn identifier() -> usize {
    TeamStats::columns()
        .iter()
        .position(|c| c.name == IDENTIFIER)
        .unwrap_or(1)
}

// table lookups
impl API {
    /// Distinct non-null identifiers, sorted descending.
    pub fn variables(&self) -> Result<Vec<String>, Error> {
        let sql = const_format::concatcp!(
            "SELECT DISTINCT ",
            IDENTIFIER,
            " FROM ",
            TEAM_STATS,
            " WHERE ",
            IDENTIFIER,
            " IS NOT NULL"
        );
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql).map_err(Error::database)?;
        let mut names = stmt
            .query_map([], |row| row.get_ref(0).map(cell))
            .map_err(Error::database)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(Error::database)?
            .iter()
            .map(label)
            .collect::<Vec<String>>();
        names.sort();
        names.dedup();
        names.reverse();
        Ok(names)
    }

    /// Every row and every declared column, keyed by identifier.
    pub fn all(&self) -> Result<Frame, Error> {
        let rows = self.scan()?;
        log::debug!("scanned {} rows", rows.len());
        Self::frame(rows)
    }

    /// Rows whose normalized identifier equals the normalized `name`.
    /// The identifier becomes the index only; it is not repeated as a column.
    /// No match yields an empty frame.
    pub fn team(&self, name: &str) -> Result<Frame, Error> {
        let id = identifier();
        let wanted = normalize(name);
        let rows = self
            .scan()?
            .into_iter()
            .filter(|row| row[id].as_str().map(normalize).as_deref() == Some(wanted.as_str()))
            .collect::<Vec<_>>();
        let mut frame = Self::frame(rows)?;
        frame.drop_column(IDENTIFIER);
        Ok(frame)
    }

    /// Distinct `(team_id, variable)` pairs, sorted by name ascending.
    pub fn teams(&self) -> Result<Vec<TeamEntry>, Error> {
        let sql = const_format::concatcp!(
            "SELECT DISTINCT ",
            TEAM_ID,
            ", ",
            IDENTIFIER,
            " FROM ",
            TEAM_STATS,
            " WHERE ",
            IDENTIFIER,
            " IS NOT NULL"
        );
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql).map_err(Error::database)?;
        let mut teams = stmt
            .query_map([], |row| {
                Ok(TeamEntry {
                    team_id: match row.get_ref(0)? {
                        ValueRef::Integer(i) => Some(i),
                        ValueRef::Real(r) => Some(r as i64),
                        _ => None,
                    },
                    variable: label(&cell(row.get_ref(1)?)),
                })
            })
            .map_err(Error::database)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(Error::database)?;
        teams.sort_by(|a, b| a.variable.cmp(&b.variable).then(a.team_id.cmp(&b.team_id)));
        Ok(teams)
    }
}
