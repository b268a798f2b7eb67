use super::*;
use anyhow::Context;
use nfl_core::*;
use rusqlite::Connection;

/// Startup verification queries run against the database file before serving.
pub trait Check {
    /// Declared type of every column actually present in the table.
    fn layout(&self) -> anyhow::Result<Vec<(String, String)>>;
    /// Total row count.
    fn rows(&self) -> anyhow::Result<usize>;
    /// Count of distinct non-null identifiers.
    fn identifiers(&self) -> anyhow::Result<usize>;

    /// Fails if the table is absent or any declared column is missing.
    /// Affinity mismatches and undeclared columns only warn.
    fn verify(&self) -> anyhow::Result<()> {
        let layout = self.layout()?;
        if layout.is_empty() {
            anyhow::bail!("table {} does not exist", TeamStats::name());
        }
        let missing = TeamStats::columns()
            .iter()
            .filter(|c| !layout.iter().any(|(name, _)| name == c.name))
            .map(|c| c.name)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            anyhow::bail!(
                "table {} (schema v{}) is missing columns: {}",
                TeamStats::name(),
                SCHEMA_VERSION,
                missing.join(", ")
            );
        }
        for (name, declared) in layout.iter() {
            match TeamStats::columns().iter().find(|c| c.name == name) {
                None => log::warn!("ignoring undeclared column {}", name),
                Some(c) if !c.affinity.admits(Affinity::of(declared)) => log::warn!(
                    "column {} declared as {:?}, expected {:?} affinity",
                    name,
                    declared,
                    c.affinity
                ),
                Some(_) => {}
            }
        }
        Ok(())
    }

    fn status(&self) -> anyhow::Result<()> {
        let rows = self.rows()?;
        let teams = self.identifiers()?;
        log::info!("┌────────────┬───────────────┐");
        log::info!("│ Table      │ {:>13} │", TeamStats::name().chars().take(13).collect::<String>());
        log::info!("├────────────┼───────────────┤");
        log::info!("│ Schema     │ {:>13} │", format!("v{}", SCHEMA_VERSION));
        log::info!("│ Rows       │ {:>13} │", rows);
        log::info!("│ Teams      │ {:>13} │", teams);
        log::info!("└────────────┴───────────────┘");
        Ok(())
    }
}

impl Check for Connection {
    fn layout(&self) -> anyhow::Result<Vec<(String, String)>> {
        let sql = const_format::concatcp!("PRAGMA table_info(", TEAM_STATS, ")");
        let mut stmt = self.prepare(sql).context("prepare table_info")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(1)?, row.get::<_, String>(2)?)))
            .context("query table_info")?
            .collect::<Result<Vec<_>, _>>()
            .context("read table_info")?;
        Ok(rows)
    }
    fn rows(&self) -> anyhow::Result<usize> {
        let sql = const_format::concatcp!("SELECT COUNT(*) FROM ", TEAM_STATS);
        self.query_row(sql, [], |row| row.get::<_, i64>(0))
            .map(|n| n as usize)
            .context("count rows")
    }
    fn identifiers(&self) -> anyhow::Result<usize> {
        let sql = const_format::concatcp!(
            "SELECT COUNT(DISTINCT ",
            IDENTIFIER,
            ") FROM ",
            TEAM_STATS
        );
        self.query_row(sql, [], |row| row.get::<_, i64>(0))
            .map(|n| n as usize)
            .context("count identifiers")
    }
}
