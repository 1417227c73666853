//! Month-over-month performance sequence.

use finmetrics_core::stats::percent_change;
use finmetrics_core::MonthlySeries;
use serde::{Deserialize, Serialize};

/// One step of a monthly performance sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    /// Period label.
    pub label: String,

    /// Value at the end of the period.
    pub value: f64,

    /// Change from the previous period in percent (0 for the first period).
    pub percent_change: f64,
}

/// Lazy iterator over a [`MonthlySeries`].
///
/// Each item is computed on demand from the previous value. The iterator is
/// one-shot and cannot be cloned to replay a partly consumed pass; call
/// [`monthly_performance`] again for a fresh one.
///
/// ```compile_fail
/// use finmetrics_core::MonthlySeries;
/// use finmetrics_portfolio::{monthly_performance, MonthlyPerformanceIter};
///
/// let series = MonthlySeries::try_from_points([("Jan", 100.0), ("Feb", 110.0)]).unwrap();
/// let mut steps = monthly_performance(&series);
/// steps.next();
/// let _replay: MonthlyPerformanceIter<'_> = steps.clone();
/// ```
#[derive(Debug)]
pub struct MonthlyPerformanceIter<'a> {
    points: std::slice::Iter<'a, (String, f64)>,
    previous: Option<f64>,
}

impl Iterator for MonthlyPerformanceIter<'_> {
    type Item = MonthlyPerformance;

    fn next(&mut self) -> Option<Self::Item> {
        let (label, value) = self.points.next()?;
        let change = match self.previous {
            None => 0.0,
            Some(prev) => percent_change(prev, *value).unwrap_or_else(|| {
                log::debug!("previous value is zero before '{}', reporting 0% change", label);
                0.0
            }),
        };
        self.previous = Some(*value);

        Some(MonthlyPerformance {
            label: label.clone(),
            value: *value,
            percent_change: change,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl ExactSizeIterator for MonthlyPerformanceIter<'_> {}

impl std::iter::FusedIterator for MonthlyPerformanceIter<'_> {}

/// Returns a lazy sequence of `(label, value, percent change)` steps.
#[must_use]
pub fn monthly_performance(series: &MonthlySeries) -> MonthlyPerformanceIter<'_> {
    MonthlyPerformanceIter {
        points: series.points().iter(),
        previous: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(points: &[(&str, f64)]) -> MonthlySeries {
        MonthlySeries::try_from_points(points.iter().copied()).unwrap()
    }

    #[test]
    fn test_three_months() {
        let data = series(&[("Jan", 100.0), ("Feb", 110.0), ("Mar", 99.0)]);
        let months: Vec<_> = monthly_performance(&data).collect();

        assert_eq!(months.len(), 3);
        assert_eq!(months[0].label, "Jan");
        assert_eq!(months[0].value, 100.0);
        assert_eq!(months[0].percent_change, 0.0);
        assert_eq!(months[1].label, "Feb");
        assert_relative_eq!(months[1].percent_change, 10.0, epsilon = 1e-9);
        assert_eq!(months[2].value, 99.0);
        assert_relative_eq!(months[2].percent_change, -10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(monthly_performance(&MonthlySeries::new()).count(), 0);

        let single: Vec<_> = monthly_performance(&series(&[("Jan", 100.0)])).collect();
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].percent_change, 0.0);
    }

    #[test]
    fn test_flat_series() {
        let data = series(&[("Jan", 100.0), ("Feb", 100.0), ("Mar", 100.0)]);
        assert!(monthly_performance(&data).all(|m| m.percent_change == 0.0));
    }

    #[test]
    fn test_lazy_one_item_at_a_time() {
        let data = series(&[("Jan", 100.0), ("Feb", 110.0), ("Mar", 121.0)]);
        let mut iter = monthly_performance(&data);

        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next().map(|m| m.label), Some("Jan".to_string()));
        assert_eq!(iter.len(), 2);
        let feb = iter.next().unwrap();
        assert_relative_eq!(feb.percent_change, 10.0, epsilon = 1e-9);
        let mar = iter.next().unwrap();
        assert_relative_eq!(mar.percent_change, 10.0, epsilon = 1e-9);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_fresh_call_restarts() {
        let data = series(&[("Jan", 10.0), ("Feb", 20.0)]);
        let first: Vec<_> = monthly_performance(&data).collect();
        let second: Vec<_> = monthly_performance(&data).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_partly_consumed_pass_does_not_leak() {
        let data = series(&[("Jan", 100.0), ("Feb", 120.0), ("Mar", 60.0)]);
        let mut partial = monthly_performance(&data);
        partial.next();
        partial.next();

        let fresh: Vec<_> = monthly_performance(&data).collect();
        assert_eq!(fresh.len(), 3);
        assert_eq!(fresh[0].label, "Jan");
        assert_eq!(fresh[0].percent_change, 0.0);

        let last = partial.next().unwrap();
        assert_eq!(last.label, "Mar");
        assert_relative_eq!(last.percent_change, -50.0, epsilon = 1e-9);
        assert!(partial.next().is_none());
    }

    #[test]
    fn test_zero_previous_value() {
        let data = series(&[("Jan", 0.0), ("Feb", 50.0)]);
        let months: Vec<_> = monthly_performance(&data).collect();
        assert_eq!(months[1].percent_change, 0.0);
    }
}
