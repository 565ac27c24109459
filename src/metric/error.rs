use std::{error::Error, time::Duration};
use thiserror::Error;

/// Failure of a measured operation.
///
/// A failed operation never contributes a sample, so a series only
/// ever aggregates durations of completed work.
#[derive(Error, Debug)]
pub enum MeasureError {
    #[error("operation has reached maximum time limit {0:?}")]
    Timeout(Duration),

    // Wraps any error type the measured operation returns
    #[error(transparent)]
    Dynamic(#[from] Box<dyn Error>),
}

impl From<std::io::Error> for MeasureError {
    fn from(value: std::io::Error) -> Self {
        MeasureError::Dynamic(Box::new(value))
    }
}
