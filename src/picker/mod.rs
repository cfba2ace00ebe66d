//! Snap-to-item wheel picker
//!
//! `GestureColumn` is the per-column gesture engine; `Picker` composes
//! several named columns under one highlight band.

pub mod column;
pub mod composer;
pub mod geometry;
mod scalar;

pub use column::{GestureColumn, Propagation, Reconciled, RenderedItem, Transition};
pub use composer::{
    Highlight, OptionGroups, Picker, ValueChange, ValueGroups, DEFAULT_HEIGHT,
    DEFAULT_ITEM_HEIGHT,
};
pub use geometry::{ColumnMetrics, OffsetBounds, RESISTANCE_EXPONENT};
pub use scalar::{PickerOption, Scalar};
