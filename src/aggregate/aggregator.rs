use std::collections::BTreeMap;
use std::time::Duration;

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::aggregate::{SampleScale, SampleSeries, SampleSink};
use crate::metric::Metric;
use crate::report::Report;

/// Collects duration samples per metric and answers statistics over the
/// raw recorded values.
///
/// One aggregator belongs to one task. Concurrent suites give every
/// task its own instance and fold the results together with
/// [`merge_into`](MetricsAggregator::merge_into) once the tasks finish,
/// so no locking is involved on the recording path.
#[derive(Debug, Clone)]
pub struct MetricsAggregator<T = &'static str> {
    series: FxHashMap<T, SampleSeries>,
    scale: SampleScale,
}

impl<T> Default for MetricsAggregator<T>
where
    T: Metric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MetricsAggregator<T>
where
    T: Metric,
{
    /// Creates an aggregator that stores samples in milliseconds.
    pub fn new() -> Self {
        Self {
            series: FxHashMap::default(),
            scale: SampleScale::default(),
        }
    }

    /// Changes the unit incoming durations are converted into.
    pub fn with_scale(self, scale: SampleScale) -> Self {
        Self { scale, ..self }
    }

    pub fn scale(&self) -> SampleScale {
        self.scale
    }

    /// Appends one sample to the metric's series.
    ///
    /// Values arrive pre-scaled. Callers timing wall-clock work go
    /// through [`SampleSink::record_duration`] instead.
    pub fn record(&mut self, metric: T, value: f64) {
        if !value.is_finite() {
            warn!(series = metric.name(), value, "recorded a non-finite sample");
        }

        self.series.entry(metric).or_default().push(value);
    }

    /// Arithmetic mean of the metric's samples, `0.0` when none exist.
    pub fn average(&self, metric: T) -> f64 {
        self.series.get(&metric).map_or(0.0, |series| series.mean())
    }

    /// Nearest-rank percentile of the metric's samples, `0.0` when none
    /// exist.
    pub fn percentile(&self, metric: T, percentile: f64) -> f64 {
        self.series
            .get(&metric)
            .map_or(0.0, |series| series.percentile(percentile))
    }

    /// Raw samples recorded for the metric, in arrival order.
    pub fn samples(&self, metric: T) -> &[f64] {
        self.series
            .get(&metric)
            .map_or(&[], |series| series.values())
    }

    /// Snapshot of every recorded series, keyed by metric name.
    ///
    /// Statistics are computed from the raw samples on every call, a
    /// report taken after further recording reflects the new values.
    pub fn report(&self) -> Report {
        let mut series = BTreeMap::new();

        for (metric, samples) in &self.series {
            series.insert(metric.name().to_owned(), samples.stats());
        }

        Report::new(series)
    }

    /// Drops every series along with its samples.
    pub fn clear(&mut self) {
        self.series.clear();
    }

    /// Folds this aggregator's samples into `other`, keeping arrival
    /// order within each series.
    pub fn merge_into(self, other: &mut Self) {
        for (metric, mut series) in self.series {
            other.series.entry(metric).or_default().append(&mut series);
        }
    }
}

impl<T> SampleSink for MetricsAggregator<T>
where
    T: Metric,
{
    type Metric = T;

    #[inline]
    fn record_duration(&mut self, metric: T, elapsed: Duration) {
        let value = self.scale.duration_to_sample(elapsed);
        self.record(metric, value);
    }
}
