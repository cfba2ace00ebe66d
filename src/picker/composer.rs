//! Multi-column picker.
//!
//! Lays out one [`GestureColumn`] per named option group and funnels every
//! column's selection into a single stream of [`ValueChange`]s. The picker
//! keeps no values of its own: callers own the option and value groups and
//! pass them back in through [`Picker::sync`] after applying changes.

use indexmap::IndexMap;

use crate::error::{PickerError, PickerResult};
use crate::log;

use super::column::{GestureColumn, Propagation};
use super::geometry::ColumnMetrics;
use super::scalar::{PickerOption, Scalar};

pub const DEFAULT_ITEM_HEIGHT: f64 = 36.0;
pub const DEFAULT_HEIGHT: f64 = 216.0;

/// Options per column name, in display order
pub type OptionGroups = IndexMap<String, Vec<PickerOption>>;

/// Current value per column name
pub type ValueGroups = IndexMap<String, Scalar>;

/// A column reporting a newly selected value (`onChange(name, value)`).
#[derive(Debug, Clone, PartialEq)]
pub struct ValueChange {
    pub name: String,
    pub value: Scalar,
}

impl ValueChange {
    pub fn new(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Fixed band marking the selection slot, independent of scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub top: f64,
    pub height: f64,
}

/// Side-by-side wheel columns sharing one height and highlight band.
#[derive(Debug, Clone)]
pub struct Picker {
    metrics: ColumnMetrics,
    columns: IndexMap<String, GestureColumn>,
}

impl Picker {
    pub fn new(item_height: f64, height: f64) -> PickerResult<Self> {
        Ok(Self {
            metrics: ColumnMetrics::new(item_height, height)?,
            columns: IndexMap::new(),
        })
    }

    pub fn metrics(&self) -> ColumnMetrics {
        self.metrics
    }

    pub fn highlight(&self) -> Highlight {
        Highlight {
            top: self.metrics.column_height / 2.0 - self.metrics.item_height / 2.0,
            height: self.metrics.item_height,
        }
    }

    pub fn column(&self, name: &str) -> Option<&GestureColumn> {
        self.columns.get(name)
    }

    pub fn columns(&self) -> impl Iterator<Item = &GestureColumn> {
        self.columns.values()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Bring the columns in line with the caller's groups.
    ///
    /// Mounts columns for new groups, reconciles columns whose inputs changed
    /// and unmounts columns whose group is gone. Returns the fallback
    /// selections of columns whose value had no matching option.
    pub fn sync(
        &mut self,
        option_groups: &OptionGroups,
        value_groups: &ValueGroups,
    ) -> PickerResult<Vec<ValueChange>> {
        let metrics = self.metrics;
        let mut changes = vec![];

        self.columns.retain(|name, _| {
            let keep = option_groups.contains_key(name);
            if !keep {
                log::log_event(&format!("{}: unmounted", name));
            }
            keep
        });

        for (name, options) in option_groups {
            let value = value_groups.get(name);
            let reconciled = match self.columns.get_mut(name) {
                Some(column) => column.update(options, value, metrics)?,
                None => {
                    let (column, reconciled) = GestureColumn::new(
                        name.clone(),
                        options.clone(),
                        value.cloned(),
                        metrics,
                    )?;
                    self.columns.insert(name.clone(), column);
                    Some(reconciled)
                }
            };
            if let Some(fallback) = reconciled.and_then(|r| r.fallback) {
                changes.push(ValueChange::new(name.clone(), fallback));
            }
        }

        // Keep columns in group order
        self.columns
            .sort_by_cached_key(|name, _| option_groups.get_index_of(name));

        Ok(changes)
    }

    fn column_mut(&mut self, name: &str) -> PickerResult<&mut GestureColumn> {
        self.columns
            .get_mut(name)
            .ok_or_else(|| PickerError::UnknownColumn(name.to_string()))
    }

    pub fn drag_start(&mut self, name: &str, pointer_y: f64) -> PickerResult<()> {
        self.column_mut(name)?.on_drag_start(pointer_y);
        Ok(())
    }

    pub fn drag_move(&mut self, name: &str, pointer_y: f64) -> PickerResult<Propagation> {
        Ok(self.column_mut(name)?.on_drag_move(pointer_y))
    }

    pub fn drag_end(&mut self, name: &str) -> PickerResult<()> {
        self.column_mut(name)?.on_drag_end();
        Ok(())
    }

    pub fn drag_cancel(&mut self, name: &str) -> PickerResult<()> {
        self.column_mut(name)?.on_drag_cancel();
        Ok(())
    }

    /// Tap at a column-relative position; selects the option under it.
    pub fn tap(&self, name: &str, pointer_y: f64) -> PickerResult<Option<ValueChange>> {
        let column = self
            .column(name)
            .ok_or_else(|| PickerError::UnknownColumn(name.to_string()))?;
        let change = column
            .option_at(pointer_y)
            .and_then(|option| column.on_item_tap(&option.value))
            .map(|value| ValueChange::new(name, value));
        Ok(change)
    }

    /// Resolve deferred settles once a frame has been committed.
    pub fn after_render(&mut self) -> Vec<ValueChange> {
        self.columns
            .iter_mut()
            .filter_map(|(name, column)| {
                column
                    .after_render()
                    .map(|value| ValueChange::new(name.clone(), value))
            })
            .collect()
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self {
            metrics: ColumnMetrics {
                item_height: DEFAULT_ITEM_HEIGHT,
                column_height: DEFAULT_HEIGHT,
            },
            columns: IndexMap::new(),
        }
    }
}
