//! Interactive CLI for team statistics.
//!
//! Reads one query per line and prints the result; `quit` or `exit` leaves.
use crate::*;
use clap::Parser;
use nfl_core::*;
use std::io::Write;

pub struct CLI(API);

impl From<API> for CLI {
    fn from(api: API) -> Self {
        Self(api)
    }
}

impl CLI {
    pub fn run(self) -> anyhow::Result<()> {
        log::info!("entering analysis");
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match self.handle(input) {
                    Err(e) => eprintln!("{}", e),
                    Ok(output) => println!("{}", output),
                },
            }
        }
        Ok(())
    }

    pub fn handle(&self, input: &str) -> Result<String, Box<dyn std::error::Error>> {
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Variables => Ok(self.0.variables()?.join("\n")),
            Query::Teams => Ok(self
                .0
                .teams()?
                .iter()
                .map(|t| match t.team_id {
                    Some(id) => format!("{:>4}  {}", id, t.variable),
                    None => format!("{:>4}  {}", "-", t.variable),
                })
                .collect::<Vec<String>>()
                .join("\n")),
            Query::Column { name } => {
                let frame = self.0.all()?;
                if !frame.columns().contains(&name) {
                    return Err(Error::NotFound(format!("column {}", name)).into());
                }
                Ok(frame
                    .index()
                    .iter()
                    .filter_map(|key| frame.get(key, &name).map(|cell| (key, cell)))
                    .map(|(key, cell)| format!("{:<24} {}", key, serde_json::to_string(cell).unwrap_or_default()))
                    .collect::<Vec<String>>()
                    .join("\n"))
            }
            Query::Team { name } => {
                let name = name.join(" ");
                let frame = self.0.team(&name)?;
                if frame.is_empty() {
                    return Err(Error::NotFound(format!("team {}", name)).into());
                }
                Ok(frame
                    .rows()
                    .flat_map(|(key, row)| {
                        std::iter::once(key.to_string()).chain(
                            frame.columns().iter().zip(row.iter()).map(|(column, cell)| {
                                format!("  {:<30} {}", column, serde_json::to_string(cell).unwrap_or_default())
                            }),
                        )
                    })
                    .collect::<Vec<String>>()
                    .join("\n"))
            }
            Query::Dump => Ok(serde_json::to_string_pretty(&self.0.all()?)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfl_database::*;

    fn cli() -> CLI {
        CLI::from(API::from(fixture()))
    }

    #[test]
    fn parses_aliases() {
        let q = Query::try_parse_from(["> ", "team", "new", "england"]).unwrap();
        assert_eq!(
            q,
            Query::Team {
                name: vec!["new".into(), "england".into()]
            }
        );
        let q = Query::try_parse_from(["> ", "var"]).unwrap();
        assert_eq!(q, Query::Variables);
    }

    #[test]
    fn variables_listed_one_per_line() {
        let out = cli().handle("variables").unwrap();
        assert_eq!(out.lines().count(), FIXTURE_TEAMS.len());
        assert_eq!(out.lines().next(), Some("New England"));
    }

    #[test]
    fn team_joins_words() {
        let out = cli().handle("team green bay").unwrap();
        assert!(out.starts_with("Green Bay"));
        assert!(out.contains("total_points"));
    }

    #[test]
    fn unknown_team_and_column_are_errors() {
        assert!(cli().handle("team nowhere").is_err());
        assert!(cli().handle("column nonsense").is_err());
    }

    #[test]
    fn column_lists_each_team() {
        let out = cli().handle("column team_id").unwrap();
        assert!(out.lines().any(|l| l.starts_with("Chicago") && l.ends_with('2')));
    }

    #[test]
    fn dump_is_json() {
        let out = cli().handle("dump").unwrap();
        let json = serde_json::from_str::<serde_json::Value>(&out).unwrap();
        assert!(json.get("total_yards_penalized").is_some());
    }
}
