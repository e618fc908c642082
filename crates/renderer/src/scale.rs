//! Scales mapping data values to pixel positions and colors.
//!
//! Three families are used by the heat map:
//! - [`BandScale`]: discrete categories (years, months) to equal-width slots
//! - [`QuantileScale`]: continuous temperatures to a fixed palette by
//!   equal-population buckets
//! - [`LinearScale`]: continuous temperatures to legend pixels
//!
//! All scales are built once from the full dataset and are immutable after.

use crate::error::{RenderError, RenderResult};

// ============================================================================
// Band scale
// ============================================================================

/// Maps a finite, ordered set of categories to equal-width pixel bands.
///
/// Padding is zero, so the step between bands equals the bandwidth.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T> {
    domain: Vec<T>,
    range: (f64, f64),
    step: f64,
}

impl<T: Ord + Copy> BandScale<T> {
    /// Build from all observed values; duplicates collapse and the domain
    /// is sorted ascending.
    pub fn new(values: impl IntoIterator<Item = T>, range: (f64, f64)) -> RenderResult<Self> {
        let mut domain: Vec<T> = values.into_iter().collect();
        domain.sort_unstable();
        domain.dedup();

        if domain.is_empty() {
            return Err(RenderError::EmptyDomain("band"));
        }

        let step = (range.1 - range.0) / domain.len() as f64;
        Ok(Self { domain, range, step })
    }

    /// Start of the band for `value`, or `None` if it is not in the domain.
    pub fn scale(&self, value: T) -> Option<f64> {
        self.index_of(value)
            .map(|i| self.range.0 + self.step * i as f64)
    }

    /// Center of the band for `value`; where axis ticks sit.
    pub fn center(&self, value: T) -> Option<f64> {
        self.scale(value).map(|start| start + self.step / 2.0)
    }

    /// Category whose band contains pixel `position`.
    pub fn invert(&self, position: f64) -> Option<T> {
        let offset = position - self.range.0;
        if self.step <= 0.0 || offset < 0.0 {
            return None;
        }
        let index = (offset / self.step).floor() as usize;
        self.domain.get(index).copied()
    }

    pub fn index_of(&self, value: T) -> Option<usize> {
        self.domain.binary_search(&value).ok()
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

// ============================================================================
// Quantile scale
// ============================================================================

/// Quantile of an ascending, non-empty sample using linear interpolation
/// between closest ranks (the R-7 estimator).
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    let first = *sorted.first()?;
    if p <= 0.0 || n < 2 {
        return Some(first);
    }
    if p >= 1.0 {
        return sorted.last().copied();
    }

    let h = (n - 1) as f64 * p;
    let i0 = h.floor() as usize;
    let v0 = sorted[i0];
    let v1 = sorted[i0 + 1];
    Some(v0 + (v1 - v0) * (h - i0 as f64))
}

/// Maps a continuous sample to a discrete range using equal-population
/// buckets.
///
/// With `N` range values there are `N - 1` thresholds. A value exactly on a
/// threshold belongs to the lower bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScale<R> {
    thresholds: Vec<f64>,
    range: Vec<R>,
    extent: (f64, f64),
}

impl<R: Clone> QuantileScale<R> {
    /// Build from every observed value (duplicates are significant).
    /// Non-finite samples are ignored.
    pub fn new(samples: impl IntoIterator<Item = f64>, range: Vec<R>) -> RenderResult<Self> {
        if range.is_empty() {
            return Err(RenderError::EmptyDomain("quantile range"));
        }

        let mut sorted: Vec<f64> = samples.into_iter().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);

        let (Some(&lo), Some(&hi)) = (sorted.first(), sorted.last()) else {
            return Err(RenderError::EmptyDomain("quantile"));
        };

        let buckets = range.len();
        let thresholds = (1..buckets)
            .filter_map(|i| quantile_sorted(&sorted, i as f64 / buckets as f64))
            .collect();

        Ok(Self {
            thresholds,
            range,
            extent: (lo, hi),
        })
    }

    /// Index of the bucket containing `value`.
    pub fn bucket(&self, value: f64) -> usize {
        self.thresholds.partition_point(|&t| t < value)
    }

    /// Range value for `value`.
    pub fn scale(&self, value: f64) -> &R {
        &self.range[self.bucket(value)]
    }

    /// The `N - 1` interior breakpoints, ascending.
    pub fn quantiles(&self) -> &[f64] {
        &self.thresholds
    }

    /// Domain interval covered by bucket `index`. The outermost buckets are
    /// clamped to the sample min and max.
    pub fn invert_extent(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.range.len() {
            return None;
        }
        let lo = match index {
            0 => self.extent.0,
            i => self.thresholds[i - 1],
        };
        let hi = self.thresholds.get(index).copied().unwrap_or(self.extent.1);
        Some((lo, hi))
    }

    pub fn range(&self) -> &[R] {
        &self.range
    }

    /// (min, max) of the sample.
    pub fn extent(&self) -> (f64, f64) {
        self.extent
    }
}

// ============================================================================
// Linear scale
// ============================================================================

/// Continuous linear mapping from a domain interval to a range interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value. A degenerate domain maps everything to the
    /// middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
