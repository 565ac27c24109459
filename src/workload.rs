use crate::aggregate::SampleSink;
use crate::measure::DurationMeasurer;
use crate::metric::{MeasureError, Metric};

/// Builds a fresh [`Workload`] instance for every task that needs one.
pub trait WorkloadBuilder<T>
where
    T: Metric,
{
    type Workload: Workload<T>;

    fn build(&self) -> Self::Workload;
}

/// One user journey through the system under test, measured step by
/// step.
///
/// Concurrent suites build a workload per task and give each task its
/// own aggregator, merging the aggregators once the tasks complete, so
/// the recording path never needs a lock.
#[allow(async_fn_in_trait)]
pub trait Workload<T>
where
    T: Metric,
{
    async fn run(
        &mut self,
        measurer: &mut DurationMeasurer<impl SampleSink<Metric = T>>,
    ) -> Result<(), MeasureError>;
}
