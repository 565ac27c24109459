use std::{convert::Infallible, error::Error, future::Future, time::Duration};

use tokio::time::timeout;
use tracing::debug;

pub use future::TimedFuture;

use crate::aggregate::SampleSink;
use crate::metric::{MeasureError, Metric, API_RESPONSE, PAGE_LOAD, TIME_TO_INTERACTIVE};

mod future;

/// Times async operations and feeds the completed ones into a sink.
///
/// Each test case wraps its navigations, backend requests and
/// multi-step transactions with one measurer. A failed or timed out
/// operation travels back to the caller unrecorded, so aggregated
/// series only ever describe work that ran to completion.
pub struct DurationMeasurer<S> {
    sink: S,
    timeout: Option<Duration>,
}

impl<S> DurationMeasurer<S>
where
    S: SampleSink,
{
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            timeout: None,
        }
    }

    /// Applies `timeout` to every measured operation, failing it with
    /// [`MeasureError::Timeout`] once the limit is reached.
    pub fn with_timeout(sink: S, timeout: Duration) -> Self {
        Self {
            sink,
            timeout: Some(timeout),
        }
    }

    /// Times an infallible operation and records its duration.
    pub async fn measure<T>(
        &mut self,
        metric: S::Metric,
        operation: impl Future<Output = T>,
    ) -> Result<(T, Duration), MeasureError> {
        self.try_measure(metric, async { Ok::<_, Infallible>(operation.await) })
            .await
    }

    /// Times a fallible operation, recording its duration only when it
    /// completes successfully. The operation's own error comes back
    /// unchanged inside [`MeasureError::Dynamic`].
    pub async fn try_measure<T, E>(
        &mut self,
        metric: S::Metric,
        operation: impl Future<Output = Result<T, E>>,
    ) -> Result<(T, Duration), MeasureError>
    where
        E: Error + 'static,
    {
        let (result, elapsed) = self.run_with_timeout(operation).await;

        match result {
            Ok(value) => {
                debug!(series = metric.name(), ?elapsed, "operation completed");
                self.sink.record_duration(metric, elapsed);
                Ok((value, elapsed))
            }
            Err(error) => Err(error),
        }
    }

    /// Records an externally timed duration, bypassing the clock.
    pub fn add_measurement(&mut self, metric: S::Metric, elapsed: Duration) {
        self.sink.record_duration(metric, elapsed);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Gives the sink back once measuring is done.
    pub fn into_inner(self) -> S {
        self.sink
    }

    async fn run_with_timeout<T, E>(
        &self,
        operation: impl Future<Output = Result<T, E>>,
    ) -> (Result<T, MeasureError>, Duration)
    where
        E: Error + 'static,
    {
        match self.timeout {
            Some(limit) => {
                let (result, elapsed) = TimedFuture::new(timeout(limit, operation)).await;

                let result = match result {
                    Ok(inner) => inner.map_err(|error| MeasureError::Dynamic(Box::new(error))),
                    Err(_) => Err(MeasureError::Timeout(limit)),
                };

                (result, elapsed)
            }
            None => {
                let (result, elapsed) = TimedFuture::new(operation).await;

                (
                    result.map_err(|error| MeasureError::Dynamic(Box::new(error))),
                    elapsed,
                )
            }
        }
    }
}

impl<S> DurationMeasurer<S>
where
    S: SampleSink<Metric = &'static str>,
{
    /// Times a navigation until the page settles and records it under
    /// [`PAGE_LOAD`].
    pub async fn page_load<T, E>(
        &mut self,
        navigation: impl Future<Output = Result<T, E>>,
    ) -> Result<Duration, MeasureError>
    where
        E: Error + 'static,
    {
        self.named(PAGE_LOAD, navigation).await
    }

    /// Times how long the page takes to become usable and records it
    /// under [`TIME_TO_INTERACTIVE`].
    pub async fn time_to_interactive<T, E>(
        &mut self,
        wait: impl Future<Output = Result<T, E>>,
    ) -> Result<Duration, MeasureError>
    where
        E: Error + 'static,
    {
        self.named(TIME_TO_INTERACTIVE, wait).await
    }

    /// Times a backend request and records it under [`API_RESPONSE`].
    pub async fn api_response<T, E>(
        &mut self,
        request: impl Future<Output = Result<T, E>>,
    ) -> Result<Duration, MeasureError>
    where
        E: Error + 'static,
    {
        self.named(API_RESPONSE, request).await
    }

    /// Times a multi-step transaction under a caller-chosen name and
    /// answers the transaction's own result alongside its duration.
    pub async fn transaction<T, E>(
        &mut self,
        name: &'static str,
        steps: impl Future<Output = Result<T, E>>,
    ) -> Result<(T, Duration), MeasureError>
    where
        E: Error + 'static,
    {
        self.try_measure(name, steps).await
    }

    async fn named<T, E>(
        &mut self,
        metric: &'static str,
        operation: impl Future<Output = Result<T, E>>,
    ) -> Result<Duration, MeasureError>
    where
        E: Error + 'static,
    {
        self.try_measure(metric, operation)
            .await
            .map(|(_, elapsed)| elapsed)
    }
}
