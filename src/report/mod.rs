//! Point-in-time views over recorded series, shaped for the humans and
//! report tooling that consume suite results.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Descriptive statistics of one series, computed from its raw samples.
///
/// Percentiles use the nearest-rank method over the sorted samples, so
/// every reported value is one that was actually observed. For any
/// non-empty series `min <= p50 <= p90 <= p95 <= p99 <= max` holds and
/// the average lies within `min..=max`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SeriesStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub p50: f64,
    pub p90: f64,
    pub p95: f64,
    pub p99: f64,
}

impl SeriesStats {
    /// Statistics of a series with no samples, all values zero.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl fmt::Display for SeriesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={} min={:.3} max={:.3} avg={:.3} p50={:.3} p90={:.3} p95={:.3} p99={:.3}",
            self.count, self.min, self.max, self.average, self.p50, self.p90, self.p95, self.p99
        )
    }
}

/// Snapshot of every series an aggregator holds, keyed by series name.
///
/// A report is plain data detached from its aggregator. Two reports
/// taken around further recording never share state, each one reflects
/// the samples present at the moment it was generated.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Report {
    series: BTreeMap<String, SeriesStats>,
}

impl Report {
    pub(crate) fn new(series: BTreeMap<String, SeriesStats>) -> Self {
        Self { series }
    }

    /// Statistics of one series, `None` when it never recorded.
    pub fn get(&self, name: &str) -> Option<&SeriesStats> {
        self.series.get(name)
    }

    /// Series statistics in alphabetical order of their names.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesStats)> {
        self.series
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, stats) in &self.series {
            writeln!(f, "{name}: {stats}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl Report {
    /// Pretty-printed JSON, one object per series.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the JSON artifact consumed by external report tooling.
    pub fn write_json(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        let json = self.to_json()?;

        std::fs::write(path, json)
    }
}
