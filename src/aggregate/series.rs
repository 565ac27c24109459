use crate::report::SeriesStats;

/// Samples recorded for one metric, kept in arrival order.
///
/// Every statistic is derived from the raw values at call time, nothing
/// is pre-aggregated or cached between queries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SampleSeries {
    samples: Vec<f64>,
}

impl SampleSeries {
    pub(crate) fn push(&mut self, value: f64) {
        self.samples.push(value);
    }

    pub(crate) fn append(&mut self, other: &mut SampleSeries) {
        self.samples.append(&mut other.samples);
    }

    /// Recorded values in the order they arrived.
    pub fn values(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arithmetic mean, `0.0` for an empty series.
    pub fn mean(&self) -> f64 {
        match self.samples.is_empty() {
            true => 0.0,
            false => self.samples.iter().sum::<f64>() / self.samples.len() as f64,
        }
    }

    /// Smallest recorded value, `0.0` for an empty series.
    pub fn min(&self) -> f64 {
        self.samples
            .iter()
            .copied()
            .min_by(|left, right| left.total_cmp(right))
            .unwrap_or(0.0)
    }

    /// Largest recorded value, `0.0` for an empty series.
    pub fn max(&self) -> f64 {
        self.samples
            .iter()
            .copied()
            .max_by(|left, right| left.total_cmp(right))
            .unwrap_or(0.0)
    }

    /// Nearest-rank percentile over the recorded values.
    ///
    /// The requested percentile is clamped into `0.0..=100.0` and an
    /// empty series answers `0.0`, so the query cannot fail.
    pub fn percentile(&self, percentile: f64) -> f64 {
        nearest_rank(&self.sorted(), percentile)
    }

    /// Full statistics block, computed from one sorted copy of the
    /// samples.
    pub fn stats(&self) -> SeriesStats {
        if self.samples.is_empty() {
            return SeriesStats::empty();
        }

        let sorted = self.sorted();

        SeriesStats {
            count: sorted.len(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            average: self.mean(),
            p50: nearest_rank(&sorted, 50.0),
            p90: nearest_rank(&sorted, 90.0),
            p95: nearest_rank(&sorted, 95.0),
            p99: nearest_rank(&sorted, 99.0),
        }
    }

    fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.samples.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }
}

/// Value at rank `ceil(percentile / 100 * len)` counting from one,
/// clamped into the valid index range.
fn nearest_rank(sorted: &[f64], percentile: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let percentile = percentile.clamp(0.0, 100.0);
    let rank = (percentile / 100.0 * sorted.len() as f64).ceil() as usize;

    sorted[rank.saturating_sub(1).min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> SampleSeries {
        let mut series = SampleSeries::default();

        for value in values {
            series.push(*value);
        }

        series
    }

    #[test]
    fn keeps_values_in_arrival_order() {
        let series = series(&[320.0, 110.0, 250.0]);

        assert_eq!(&[320.0, 110.0, 250.0], series.values());
    }

    #[test]
    fn averages_values_exactly() {
        let series = series(&[100.0, 200.0, 300.0, 400.0, 500.0]);

        assert_eq!(300.0, series.mean());
    }

    #[test]
    fn mean_stays_within_observed_range() {
        let series = series(&[0.1, 0.2, 0.7]);

        assert!(series.mean() >= series.min());
        assert!(series.mean() <= series.max());
    }

    #[test]
    fn picks_nearest_rank_percentiles() {
        let series = series(&[100.0, 200.0, 300.0, 400.0, 500.0]);

        assert_eq!(300.0, series.percentile(50.0));
        assert_eq!(500.0, series.percentile(90.0));
        assert_eq!(500.0, series.percentile(95.0));
        assert_eq!(500.0, series.percentile(99.0));
    }

    #[test]
    fn sorts_values_before_ranking() {
        let series = series(&[500.0, 100.0, 300.0, 200.0, 400.0]);

        assert_eq!(300.0, series.percentile(50.0));
        assert_eq!(100.0, series.percentile(10.0));
    }

    #[test]
    fn extreme_percentiles_answer_min_and_max() {
        let series = series(&[42.0, 7.0, 99.0, 12.0]);

        assert_eq!(series.min(), series.percentile(0.0));
        assert_eq!(series.max(), series.percentile(100.0));
    }

    #[test]
    fn percentiles_never_decrease_as_percentile_grows() {
        let series = series(&[12.0, 50.0, 3.0, 50.0, 7.0, 21.0, 44.0]);

        let mut previous = series.percentile(0.0);

        for percentile in 1..=100 {
            let current = series.percentile(percentile as f64);

            assert!(
                current >= previous,
                "p{} = {current} dropped below p{} = {previous}",
                percentile,
                percentile - 1
            );

            previous = current;
        }
    }

    #[test]
    fn single_sample_answers_every_percentile() {
        let series = series(&[250.0]);

        assert_eq!(250.0, series.percentile(0.0));
        assert_eq!(250.0, series.percentile(50.0));
        assert_eq!(250.0, series.percentile(99.0));
        assert_eq!(250.0, series.percentile(100.0));
    }

    #[test]
    fn clamps_out_of_range_percentiles() {
        let series = series(&[10.0, 20.0, 30.0]);

        assert_eq!(10.0, series.percentile(-20.0));
        assert_eq!(30.0, series.percentile(400.0));
    }

    #[test]
    fn empty_series_answers_zero_everywhere() {
        let series = SampleSeries::default();

        assert_eq!(0.0, series.mean());
        assert_eq!(0.0, series.min());
        assert_eq!(0.0, series.max());
        assert_eq!(0.0, series.percentile(95.0));
        assert!(series.values().is_empty());
    }

    #[test]
    fn stats_match_individual_queries() {
        let series = series(&[100.0, 200.0, 300.0, 400.0, 500.0]);
        let stats = series.stats();

        assert_eq!(5, stats.count);
        assert_eq!(series.min(), stats.min);
        assert_eq!(series.max(), stats.max);
        assert_eq!(series.mean(), stats.average);
        assert_eq!(series.percentile(50.0), stats.p50);
        assert_eq!(series.percentile(90.0), stats.p90);
        assert_eq!(series.percentile(95.0), stats.p95);
        assert_eq!(series.percentile(99.0), stats.p99);
    }

    #[test]
    fn stats_for_empty_series_are_all_zero() {
        let stats = SampleSeries::default().stats();

        assert_eq!(0, stats.count);
        assert_eq!(0.0, stats.min);
        assert_eq!(0.0, stats.max);
        assert_eq!(0.0, stats.average);
        assert_eq!(0.0, stats.p99);
    }

    #[test]
    fn append_moves_samples_over() {
        let mut left = series(&[10.0, 20.0]);
        let mut right = series(&[30.0]);

        left.append(&mut right);

        assert_eq!(&[10.0, 20.0, 30.0], left.values());
        assert!(right.is_empty());
    }
}
