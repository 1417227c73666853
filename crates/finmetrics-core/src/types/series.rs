//! Ordered period-labelled value series.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// An ordered mapping from period label (e.g. "Jan") to a value.
///
/// Iteration order is insertion order, which callers use as chronological
/// order. Pushing a label that already exists replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    points: Vec<(String, f64)>,
}

impl MonthlySeries {
    /// Creates an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a labelled value, or replaces the value of an existing label.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN or infinite.
    pub fn push(&mut self, label: impl Into<String>, value: f64) -> CoreResult<()> {
        let label = label.into();
        if !value.is_finite() {
            log::warn!("rejecting non-finite value {} for '{}'", value, label);
            return Err(CoreError::non_finite(format!("series value '{label}'"), value));
        }

        match self.points.iter_mut().find(|(l, _)| *l == label) {
            Some(point) => point.1 = value,
            None => self.points.push((label, value)),
        }
        Ok(())
    }

    /// Builder-style variant of [`MonthlySeries::push`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN or infinite.
    pub fn with(mut self, label: impl Into<String>, value: f64) -> CoreResult<Self> {
        self.push(label, value)?;
        Ok(self)
    }

    /// Builds a series from labelled values.
    ///
    /// # Errors
    ///
    /// Returns an error on the first non-finite value.
    pub fn try_from_points<I, L>(points: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        let mut series = Self::new();
        for (label, value) in points {
            series.push(label, value)?;
        }
        Ok(series)
    }

    /// Returns the value stored under a label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    /// Iterates over `(label, value)` pairs in series order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.points.iter().map(|(l, v)| (l.as_str(), *v))
    }

    /// Number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the underlying points.
    #[must_use]
    pub fn points(&self) -> &[(String, f64)] {
        &self.points
    }
}
