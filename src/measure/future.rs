use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use pin_project_lite::pin_project;
use tokio::time::Instant;

#[derive(Debug)]
enum TimedFutureState {
    Ready,
    Running(Instant),
    Complete,
}

impl TimedFutureState {
    fn start_timer(&mut self) {
        match self {
            Self::Ready => *self = Self::Running(Instant::now()),
            _ => unreachable!(),
        }
    }

    fn finish_timer(&mut self) -> Duration {
        match self {
            Self::Running(start) => {
                let elapsed = start.elapsed();
                *self = Self::Complete;
                elapsed
            }
            _ => unreachable!(),
        }
    }
}

pin_project! {
    /// Reports how long the [inner][`std::future::Future`] future took to resolve.
    ///
    /// The timer starts on the first poll rather than on construction,
    /// so time spent queued behind other tasks is not charged to the
    /// measured operation.
    ///
    /// ```
    /// use std::time::Duration;
    /// use durometer::measure::TimedFuture;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let (value, elapsed) = TimedFuture::new(async { 1 + 1 }).await;
    ///
    ///     assert_eq!(2, value);
    ///     assert!(elapsed < Duration::from_secs(1));
    /// }
    /// ```
    pub struct TimedFuture<F> {
        #[pin]
        inner: F,
        state: TimedFutureState,
    }
}

impl<F> TimedFuture<F>
where
    F: Future,
{
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            state: TimedFutureState::Ready,
        }
    }
}

impl<F> Future for TimedFuture<F>
where
    F: Future,
{
    type Output = (F::Output, Duration);

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        loop {
            let this = self.as_mut().project();
            let result = match &this.state {
                TimedFutureState::Ready => {
                    this.state.start_timer();
                    continue;
                }
                TimedFutureState::Running(..) => this.inner.poll(cx),
                TimedFutureState::Complete => unreachable!(),
            };

            match result {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(output) => {
                    let elapsed = this.state.finish_timer();
                    return Poll::Ready((output, elapsed));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::{task::yield_now, time::advance};

    use super::*;

    #[test]
    fn transitions_into_running_state_on_starting_timer() {
        let mut state = TimedFutureState::Ready;

        state.start_timer();

        assert!(matches!(state, TimedFutureState::Running(..)));
    }

    #[test]
    fn transitions_into_complete_state_on_finished_timer() {
        let mut state = TimedFutureState::Running(Instant::now());

        state.finish_timer();

        assert!(matches!(state, TimedFutureState::Complete));
    }

    #[tokio::test]
    async fn executes_underlying_future() {
        let (value, _) = TimedFuture::new(async { 1 + 1 }).await;

        assert_eq!(2, value);
    }

    #[tokio::test(start_paused = true)]
    async fn measures_time_taken_by_inner_future() {
        let (_, elapsed) = TimedFuture::new(async {
            advance(Duration::from_millis(30)).await;
        })
        .await;

        assert_eq!(Duration::from_millis(30), elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn starts_timer_on_first_poll_not_on_creation() {
        let future = TimedFuture::new(async {
            advance(Duration::from_millis(5)).await;
        });

        advance(Duration::from_millis(120)).await;

        let (_, elapsed) = future.await;

        assert_eq!(Duration::from_millis(5), elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_timer_running_across_polls() {
        let (_, elapsed) = TimedFuture::new(async {
            advance(Duration::from_millis(10)).await;
            yield_now().await;
            advance(Duration::from_millis(15)).await;
        })
        .await;

        assert_eq!(Duration::from_millis(25), elapsed);
    }
}
