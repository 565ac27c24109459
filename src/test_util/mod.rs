use std::ops::{Deref, DerefMut};
use std::time::Duration;

use tracing::info;

use crate::aggregate::{MetricsAggregator, SampleSink};
use crate::metric::Metric;

/// Sink that keeps reported durations in a vector for later
/// verification in tests.
pub struct RecordingSink<T> {
    values: Vec<(T, Duration)>,
}

impl<T> RecordingSink<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(self) -> Vec<(T, Duration)> {
        self.values
    }
}

impl<T> Default for RecordingSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SampleSink for RecordingSink<T>
where
    T: Metric,
{
    type Metric = T;

    fn record_duration(&mut self, metric: T, elapsed: Duration) {
        self.values.push((metric, elapsed));
    }
}

/// Owns one test case's aggregator and logs its report once the test
/// is done.
///
/// Dereferences to the aggregator, so recording and queries go through
/// the session directly. Dropping the session emits the report of
/// every non-empty series at `info` level.
pub struct MetricsSession<T = &'static str>
where
    T: Metric,
{
    aggregator: MetricsAggregator<T>,
    label: &'static str,
}

impl<T> MetricsSession<T>
where
    T: Metric,
{
    pub fn new(label: &'static str) -> Self {
        Self {
            aggregator: MetricsAggregator::new(),
            label,
        }
    }
}

impl<T> Deref for MetricsSession<T>
where
    T: Metric,
{
    type Target = MetricsAggregator<T>;

    fn deref(&self) -> &Self::Target {
        &self.aggregator
    }
}

impl<T> DerefMut for MetricsSession<T>
where
    T: Metric,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.aggregator
    }
}

impl<T> Drop for MetricsSession<T>
where
    T: Metric,
{
    fn drop(&mut self) {
        let report = self.aggregator.report();

        if !report.is_empty() {
            info!(test = self.label, report = %report, "performance report");
        }
    }
}
