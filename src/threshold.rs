/// How a measured value sits against a [`Threshold`].
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Grade {
    Excellent,
    Good,
    Acceptable,
    Breached,
}

impl Grade {
    /// Everything up to the acceptable band passes, only
    /// [`Grade::Breached`] fails a check.
    pub fn is_acceptable(&self) -> bool {
        !matches!(self, Grade::Breached)
    }
}

/// Performance bands for one kind of operation, in the same unit the
/// checked values are recorded in (milliseconds by default).
///
/// Grading compares with strict `<`, a value exactly on a band
/// boundary falls into the next band out.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Threshold {
    excellent: f64,
    good: f64,
    acceptable: f64,
}

impl Threshold {
    /// Bands for full page navigations.
    pub const PAGE_LOAD: Threshold = Threshold::new(1_000.0, 2_500.0, 4_000.0);

    /// Bands for single backend requests.
    pub const API_RESPONSE: Threshold = Threshold::new(200.0, 500.0, 1_000.0);

    /// Bands for multi-step transactions such as a checkout.
    pub const TRANSACTION: Threshold = Threshold::new(2_000.0, 5_000.0, 10_000.0);

    pub const fn new(excellent: f64, good: f64, acceptable: f64) -> Self {
        Self {
            excellent,
            good,
            acceptable,
        }
    }

    pub fn grade(&self, value: f64) -> Grade {
        match value {
            value if value < self.excellent => Grade::Excellent,
            value if value < self.good => Grade::Good,
            value if value < self.acceptable => Grade::Acceptable,
            _ => Grade::Breached,
        }
    }

    /// Outer limit of the acceptable band.
    pub fn acceptable(&self) -> f64 {
        self.acceptable
    }
}
