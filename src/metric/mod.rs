pub use std::hash::Hash;

pub use error::*;

mod error;

/// Series name recorded by
/// [`DurationMeasurer::page_load`](crate::measure::DurationMeasurer::page_load).
pub const PAGE_LOAD: &str = "page_load";

/// Series name recorded by
/// [`DurationMeasurer::time_to_interactive`](crate::measure::DurationMeasurer::time_to_interactive).
pub const TIME_TO_INTERACTIVE: &str = "time_to_interactive";

/// Series name recorded by
/// [`DurationMeasurer::api_response`](crate::measure::DurationMeasurer::api_response).
pub const API_RESPONSE: &str = "api_response";

/// Identifies a series of duration samples.
///
/// Plain `&'static str` names work out of the box. Suites with a fixed
/// set of checkpoints usually declare an enum instead, which makes a
/// typo in a series name a compile error.
pub trait Metric: Hash + Eq + Copy {
    fn name(&self) -> &str;
}

impl Metric for &str {
    fn name(&self) -> &str {
        self
    }
}
