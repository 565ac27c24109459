//! Performance-metrics aggregation for asynchronous end-to-end suites.
//!
//! `durometer` times async operations against the wall clock, records
//! the durations of the ones that complete under named series and
//! answers average, nearest-rank percentile and full-report queries
//! over the raw samples. Nothing is pre-aggregated, every query reads
//! the values recorded so far.
//!
//! ```
//! use durometer::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut measurer = DurationMeasurer::new(MetricsAggregator::new());
//!
//!     let (value, _elapsed) = measurer
//!         .measure("api_response", async { 40 + 2 })
//!         .await
//!         .unwrap();
//!
//!     assert_eq!(42, value);
//!
//!     let aggregator = measurer.into_inner();
//!
//!     assert_eq!(1, aggregator.samples("api_response").len());
//!     assert!(aggregator.report().get("api_response").is_some());
//! }
//! ```

pub mod aggregate;
pub mod measure;
pub mod metric;
pub mod report;
pub mod threshold;
pub mod workload;

#[cfg(any(feature = "test_util", test))]
pub mod test_util;

pub mod prelude {
    pub use crate::aggregate::{MetricsAggregator, SampleScale, SampleSeries, SampleSink};
    pub use crate::measure::{DurationMeasurer, TimedFuture};
    pub use crate::metric::{MeasureError, Metric};
    pub use crate::report::{Report, SeriesStats};
    pub use crate::threshold::{Grade, Threshold};
    pub use crate::workload::{Workload, WorkloadBuilder};
}
