//! Coordinate math for a wheel column.
//!
//! Offsets are vertical translations of the option list in pixels. When the
//! offset equals `max - i * item_height`, option `i` sits centered in the
//! viewport. Negative offsets scroll content upward.

use crate::error::{PickerError, PickerResult};

/// Exponent of the power-law damping applied beyond the scroll bounds.
pub const RESISTANCE_EXPONENT: f64 = 0.8;

/// Slack absorbed before flooring a settle distance, in items. Resting
/// offsets built from fractional item heights land a rounding error short
/// of their index.
const SETTLE_EPSILON: f64 = 1e-9;

/// Pixel sizes of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMetrics {
    pub item_height: f64,
    pub column_height: f64,
}

impl ColumnMetrics {
    /// Create metrics, rejecting non-positive or non-finite heights.
    pub fn new(item_height: f64, column_height: f64) -> PickerResult<Self> {
        let valid = |h: f64| h.is_finite() && h > 0.0;
        if !valid(item_height) || !valid(column_height) {
            return Err(PickerError::InvalidMetrics {
                item_height,
                column_height,
            });
        }
        Ok(Self {
            item_height,
            column_height,
        })
    }

    /// Offset at which option `index` is centered.
    pub fn offset_for_index(&self, index: usize) -> f64 {
        self.column_height / 2.0 - self.item_height / 2.0 - index as f64 * self.item_height
    }

    /// Scroll range for a list of `len` options.
    pub fn bounds(&self, len: usize) -> OffsetBounds {
        OffsetBounds {
            min: self.column_height / 2.0 - self.item_height * len as f64 + self.item_height / 2.0,
            max: self.column_height / 2.0 - self.item_height / 2.0,
        }
    }

    /// Index a released offset settles to, clamped to `[0, len - 1]`.
    ///
    /// Overshooting past the last item would otherwise produce an index
    /// beyond the list.
    pub fn settle_index(&self, offset: f64, len: usize) -> usize {
        let max = self.bounds(len).max;
        let raw = ((max - offset) / self.item_height + SETTLE_EPSILON).floor();
        if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(len.saturating_sub(1))
        }
    }

    /// Option under a column-relative `y` when the list sits at `offset`.
    pub fn index_at(&self, offset: f64, y: f64, len: usize) -> Option<usize> {
        let pos = ((y - offset) / self.item_height).floor();
        if pos < 0.0 || !pos.is_finite() {
            return None;
        }
        let index = pos as usize;
        (index < len).then_some(index)
    }
}

/// Inclusive scroll range of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetBounds {
    pub min: f64,
    pub max: f64,
}

impl OffsetBounds {
    /// Apply elastic resistance to a raw drag candidate.
    ///
    /// Inside the range the candidate passes through untouched; beyond it the
    /// overshoot grows as `overshoot^0.8`.
    pub fn resist(&self, candidate: f64) -> f64 {
        if candidate < self.min {
            self.min - (self.min - candidate).powf(RESISTANCE_EXPONENT)
        } else if candidate > self.max {
            self.max + (candidate - self.max).powf(RESISTANCE_EXPONENT)
        } else {
            candidate
        }
    }
}
