use super::Cell;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;
use std::collections::HashSet;

/// Column-oriented table keyed by a unique string index.
///
/// Serializes as `{"<column>": {"<index>": <cell>, ...}, ...}` with columns
/// in declaration order and rows in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    index: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            index: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Returns `false`, leaving the frame untouched, if the
    /// key is already present or the row width does not match.
    pub fn push(&mut self, key: String, row: Vec<Cell>) -> bool {
        if row.len() != self.columns.len() || self.index.contains(&key) {
            return false;
        }
        self.index.push(key);
        self.rows.push(row);
        true
    }

    /// Removes a column by name. No-op if the column is absent.
    pub fn drop_column(&mut self, name: &str) {
        if let Some(j) = self.columns.iter().position(|c| c == name) {
            self.columns.remove(j);
            for row in self.rows.iter_mut() {
                row.remove(j);
            }
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn index(&self) -> &[String] {
        &self.index
    }
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Cell])> {
        self.index
            .iter()
            .map(String::as_str)
            .zip(self.rows.iter().map(Vec::as_slice))
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn get(&self, key: &str, column: &str) -> Option<&Cell> {
        let i = self.index.iter().position(|k| k == key)?;
        let j = self.columns.iter().position(|c| c == column)?;
        self.rows.get(i).and_then(|row| row.get(j))
    }

    /// Keys that occur more than once in `keys`, in first-seen order.
    pub fn duplicates<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for key in keys {
            if !seen.insert(key) && !dupes.contains(&key) {
                dupes.push(key);
            }
        }
        dupes
    }
}

struct Column<'a> {
    frame: &'a Frame,
    j: usize,
}

impl Serialize for Column<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.frame.index.len()))?;
        for (key, row) in self.frame.index.iter().zip(self.frame.rows.iter()) {
            map.serialize_entry(key, &row[self.j])?;
        }
        map.end()
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (j, name) in self.columns.iter().enumerate() {
            map.serialize_entry(name, &Column { frame: self, j })?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        let mut frame = Frame::new(["team_id", "variable", "total_points"]);
        assert!(frame.push(
            "Chicago Bears".into(),
            vec![
                Cell::Integer(6),
                Cell::Text("Chicago Bears".into()),
                Cell::Real(280.0)
            ]
        ));
        assert!(frame.push(
            "Miami Dolphins".into(),
            vec![
                Cell::Integer(20),
                Cell::Text("Miami Dolphins".into()),
                Cell::Null
            ]
        ));
        frame
    }

    #[test]
    fn serializes_column_oriented() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["team_id"]["Chicago Bears"], 6);
        assert_eq!(json["total_points"]["Chicago Bears"], 280.0);
        assert!(json["total_points"]["Miami Dolphins"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn rejects_duplicate_keys_and_bad_widths() {
        let mut frame = sample();
        assert!(!frame.push("Chicago Bears".into(), vec![Cell::Null; 3]));
        assert!(!frame.push("Detroit Lions".into(), vec![Cell::Null; 2]));
        assert_eq!(frame.len(), 2);
    }

    #[test]
    fn drop_column_narrows_rows() {
        let mut frame = sample();
        frame.drop_column("variable");
        assert_eq!(frame.columns(), ["team_id", "total_points"]);
        assert_eq!(frame.get("Miami Dolphins", "team_id"), Some(&Cell::Integer(20)));
        assert!(frame.rows().all(|(_, row)| row.len() == 2));
    }

    #[test]
    fn empty_frame_keeps_columns() {
        let frame = Frame::new(["team_id", "variable"]);
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"team_id":{},"variable":{}}"#);
    }

    #[test]
    fn duplicates_reported_once() {
        let dupes = Frame::duplicates(["a", "b", "a", "c", "a", "b"]);
        assert_eq!(dupes, vec!["a", "b"]);
    }
}
