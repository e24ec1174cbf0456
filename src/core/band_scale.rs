use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Ordinal scale splitting a pixel range into one band per category.
///
/// `padding` is used both between bands and before the first / after the
/// last band, as a fraction of the band step. Leftover space is split evenly
/// on both sides.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Builds the scale; repeated categories keep their first position.
    pub fn new<I, S>(categories: I, range_start: f64, range_end: f64, padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() || range_end < range_start {
            return Err(ChartError::InvalidData(
                "band range must be finite and ascending".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..=1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1]".to_owned(),
            ));
        }

        let domain: IndexSet<String> = categories.into_iter().map(Into::into).collect();
        let n = domain.len() as f64;
        let span = range_end - range_start;
        let step = span / (n - padding + 2.0 * padding).max(1.0);
        let start = range_start + (span - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Ok(Self {
            domain,
            range_start,
            range_end,
            padding,
            start,
            step,
            bandwidth,
        })
    }

    pub fn domain(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Left edge of the band for `category`.
    pub fn position(&self, category: &str) -> ChartResult<f64> {
        let index = self
            .domain
            .get_index_of(category)
            .ok_or_else(|| ChartError::UnknownCategory {
                name: category.to_owned(),
            })?;
        Ok(self.start + self.step * index as f64)
    }

    /// Horizontal middle of the band for `category`.
    pub fn center(&self, category: &str) -> ChartResult<f64> {
        Ok(self.position(category)? + self.bandwidth * 0.5)
    }

    /// `(category, band center)` pairs in domain order.
    pub fn centers(&self) -> impl Iterator<Item = (&str, f64)> {
        self.domain.iter().enumerate().map(|(index, category)| {
            (
                category.as_str(),
                self.start + self.step * index as f64 + self.bandwidth * 0.5,
            )
        })
    }
}
