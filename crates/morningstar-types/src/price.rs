//! Date-keyed price series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ProviderError;

/// A single dated price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Price (or FX rate) on that date.
    pub price: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub const fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }
}

/// Prices keyed by date, in the order the provider returned them.
///
/// The series never re-sorts its entries and holds at most one price per
/// date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Creates an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Builds a series from points in provider order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Malformed`] if a date occurs more than once.
    pub fn from_points(points: impl IntoIterator<Item = PricePoint>) -> Result<Self, ProviderError> {
        let points: Vec<PricePoint> = points.into_iter().collect();
        let mut seen = HashSet::with_capacity(points.len());
        for point in &points {
            if !seen.insert(point.date) {
                return Err(ProviderError::Malformed(format!(
                    "duplicate price for {}",
                    point.date
                )));
            }
        }
        Ok(Self { points })
    }

    /// Returns the dates in provider order.
    pub fn keys(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    /// Returns the points in provider order.
    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }

    /// Looks up the price for a date.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.points.iter().find(|p| p.date == date).map(|p| p.price)
    }

    /// Returns true if the series has a price for the date.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.get(date).is_some()
    }

    /// Returns the first point in provider order.
    #[must_use]
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Returns the last point in provider order.
    #[must_use]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Returns the number of prices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for PriceSeries {
    type Item = PricePoint;
    type IntoIter = std::vec::IntoIter<PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
