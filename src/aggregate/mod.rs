use std::time::Duration;

pub use aggregator::MetricsAggregator;
pub use scale::SampleScale;
pub use series::SampleSeries;

use crate::metric::Metric;

mod aggregator;
mod scale;
mod series;

/// Destination for measured durations.
///
/// Implemented by [`MetricsAggregator`] and by test doubles. A measurer
/// only reports operations that ran to completion through this trait,
/// failed operations never reach the sink.
pub trait SampleSink {
    type Metric: Metric;

    fn record_duration(&mut self, metric: Self::Metric, elapsed: Duration);
}
