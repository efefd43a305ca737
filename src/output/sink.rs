//! Reporting sinks for run statistics
//!
//! A sink receives one [`StatsRecord`] per search. Sinks live outside the
//! search: a failing sink is logged and ignored.

use crate::solver::StatsRecord;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Destination for run statistics
pub trait StatsSink {
    /// Store or display one record
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be delivered.
    fn publish(&mut self, record: &StatsRecord) -> Result<()>;
}

/// Collects records in memory
impl StatsSink for Vec<StatsRecord> {
    fn publish(&mut self, record: &StatsRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Appends one JSON object per record to a file, creating it if needed
#[derive(Debug, Clone)]
pub struct JsonLinesSink {
    path: PathBuf,
}

impl JsonLinesSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsSink for JsonLinesSink {
    fn publish(&mut self, record: &StatsRecord) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, record).context("Failed to encode stats record")?;
        writeln!(writer)?;
        writer
            .flush()
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Publish a record, logging instead of returning any failure
pub fn publish_or_warn(sink: &mut dyn StatsSink, record: &StatsRecord) {
    if let Err(e) = sink.publish(record) {
        let reason = format!("{e:#}");
        warn!(target_word = %record.target, error = %reason, "could not publish run statistics");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn record(target: &str) -> StatsRecord {
        StatsRecord {
            algorithm: "A*".to_string(),
            time: 0.0012,
            memory: 2,
            expanded_nodes: 2,
            max_open_size: 1,
            target: target.to_string(),
            list_expanded_nodes: format!("aaron, {target}"),
        }
    }

    struct FailingSink;

    impl StatsSink for FailingSink {
        fn publish(&mut self, _record: &StatsRecord) -> Result<()> {
            Err(anyhow!("disk full"))
        }
    }

    #[test]
    fn vec_sink_collects() {
        let mut sink: Vec<StatsRecord> = Vec::new();
        publish_or_warn(&mut sink, &record("eagle"));
        assert_eq!(sink, vec![record("eagle")]);
    }

    #[test]
    fn json_lines_sink_appends() {
        let path = std::env::temp_dir().join(format!("astar_wordle_sink_{}.jsonl", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut sink = JsonLinesSink::new(&path);
        sink.publish(&record("eagle")).unwrap();
        sink.publish(&record("angle")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let rows: Vec<StatsRecord> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(rows, vec![record("eagle"), record("angle")]);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let mut sink = JsonLinesSink::new("/definitely/not/a/dir/stats.jsonl");
        assert!(sink.publish(&record("eagle")).is_err());
    }

    #[test]
    fn failures_are_swallowed() {
        let mut sink = FailingSink;
        publish_or_warn(&mut sink, &record("eagle"));
    }
}
