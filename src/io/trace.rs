//! Per-iteration search traces and their CSV export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::ops::OperatorKind;

/// One accepted step of a search run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Iteration at which the step was accepted; 0 is the initial state.
    pub iteration: usize,
    /// Total distance after the step.
    pub distance: f64,
    /// The operator that produced the step; `None` for the initial state.
    pub operator: Option<OperatorKind>,
    /// Number of non-empty routes after the step.
    pub vehicles: usize,
    /// Wall-clock seconds since the run started.
    pub elapsed_secs: f64,
}

/// The ordered trace of a whole run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunTrace {
    records: Vec<TraceRecord>,
}

impl RunTrace {
    /// An empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn push(&mut self, record: TraceRecord) {
        self.records.push(record);
    }

    /// All records, in acceptance order.
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last recorded distance, if any step was recorded.
    pub fn final_distance(&self) -> Option<f64> {
        self.records.last().map(|r| r.distance)
    }

    /// Writes the trace as a `;`-separated CSV file named
    /// `trace_<unix-seconds>.csv` under `dir`, returning the path.
    pub fn write_csv(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let path = dir.join(format!("trace_{stamp}.csv"));
        let mut out = BufWriter::new(File::create(&path)?);
        writeln!(out, "iteration;distance;operator;vehicles;elapsed_secs")?;
        for r in &self.records {
            let operator = r.operator.map_or("initial", |k| k.name());
            writeln!(
                out,
                "{};{};{};{};{}",
                r.iteration, r.distance, operator, r.vehicles, r.elapsed_secs
            )?;
        }
        out.flush()?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RunTrace {
        let mut trace = RunTrace::new();
        trace.push(TraceRecord {
            iteration: 0,
            distance: 50.0,
            operator: None,
            vehicles: 2,
            elapsed_secs: 0.0,
        });
        trace.push(TraceRecord {
            iteration: 1,
            distance: 42.5,
            operator: Some(OperatorKind::Relocate),
            vehicles: 2,
            elapsed_secs: 0.001,
        });
        trace
    }

    #[test]
    fn test_final_distance() {
        assert_eq!(sample().final_distance(), Some(42.5));
        assert_eq!(RunTrace::new().final_distance(), None);
    }

    #[test]
    fn test_write_csv_layout() {
        let dir = std::env::temp_dir();
        let path = sample().write_csv(&dir).expect("writable temp dir");
        let body = std::fs::read_to_string(&path).expect("just written");
        std::fs::remove_file(&path).ok();

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "iteration;distance;operator;vehicles;elapsed_secs");
        assert!(lines[1].starts_with("0;50;initial;2;"));
        assert!(lines[2].starts_with("1;42.5;relocate;2;"));
    }
}
