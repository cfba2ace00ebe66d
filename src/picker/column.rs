//! A single snap-to-item wheel column.
//!
//! The column turns a pointer drag into a scroll offset and reports discrete
//! "value selected" notifications to its owner. It never changes the value it
//! was given: the owner applies the notification and hands the new value back
//! through [`GestureColumn::update`], which re-derives the resting offset.
//!
//! # Gesture lifecycle
//!
//! ```text
//! Idle --drag_start--> Armed --first move--> Dragging --drag_end--> Idle (+ settle)
//!                        |                       |
//!                        +--drag_end/cancel--> Idle <--drag_cancel (offset restored)
//! ```
//!
//! The settle of a finished drag is deferred: [`GestureColumn::after_render`]
//! resolves it once the owner has committed the frame showing the released
//! offset.

use crate::error::{PickerError, PickerResult};
use crate::log;

use super::geometry::{ColumnMetrics, OffsetBounds};
use super::scalar::{PickerOption, Scalar};

/// Pointer gesture state, private to each column.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    /// Pointer is down but has not moved yet
    Armed { anchor_y: f64, offset_at_start: f64 },
    Dragging { anchor_y: f64, offset_at_start: f64 },
}

/// Whether the host should keep routing a pointer event elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Propagation {
    /// The column owns the gesture; suppress any default handling
    Stop,
    Continue,
}

/// How the rendered offset should move towards `scroll_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Track the pointer exactly (active drag)
    Immediate,
    /// Ease into the new offset
    Eased,
}

/// Result of re-deriving offset and bounds from the column inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub scroll_offset: f64,
    pub bounds: OffsetBounds,
    /// Value selected on the owner's behalf when the current value had no
    /// matching option
    pub fallback: Option<Scalar>,
}

/// An option positioned inside the column viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem<'a> {
    pub index: usize,
    pub option: &'a PickerOption,
    /// Top edge relative to the column top, in pixels
    pub top: f64,
    pub selected: bool,
}

/// Gesture-to-position engine for one list of options.
#[derive(Debug, Clone)]
pub struct GestureColumn {
    name: String,
    options: Vec<PickerOption>,
    value: Option<Scalar>,
    metrics: ColumnMetrics,
    scroll_offset: f64,
    bounds: OffsetBounds,
    drag: DragState,
    settle_pending: bool,
}

impl GestureColumn {
    /// Mount a column and perform its first reconciliation.
    pub fn new(
        name: impl Into<String>,
        options: Vec<PickerOption>,
        value: Option<Scalar>,
        metrics: ColumnMetrics,
    ) -> PickerResult<(Self, Reconciled)> {
        let name = name.into();
        if options.is_empty() {
            return Err(PickerError::EmptyOptionList(name));
        }
        let bounds = metrics.bounds(options.len());
        let mut column = Self {
            name,
            options,
            value,
            metrics,
            scroll_offset: bounds.max,
            bounds,
            drag: DragState::Idle,
            settle_pending: false,
        };
        let reconciled = column.derive_offset();
        Ok((column, reconciled))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[PickerOption] {
        &self.options
    }

    pub fn value(&self) -> Option<&Scalar> {
        self.value.as_ref()
    }

    pub fn metrics(&self) -> ColumnMetrics {
        self.metrics
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn bounds(&self) -> OffsetBounds {
        self.bounds
    }

    /// True only once a drag has been confirmed by a move.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// True while a pointer is down on this column, confirmed or not.
    pub fn has_gesture(&self) -> bool {
        !matches!(self.drag, DragState::Idle)
    }

    pub fn has_pending_settle(&self) -> bool {
        self.settle_pending
    }

    pub fn transition(&self) -> Transition {
        if self.is_dragging() {
            Transition::Immediate
        } else {
            Transition::Eased
        }
    }

    /// Re-derive offset and bounds from new inputs.
    ///
    /// Does not look at drag state: a new resting offset replaces the frame
    /// of reference of any drag in flight.
    pub fn reconcile(
        &mut self,
        options: Vec<PickerOption>,
        value: Option<Scalar>,
        metrics: ColumnMetrics,
    ) -> PickerResult<Reconciled> {
        if options.is_empty() {
            return Err(PickerError::EmptyOptionList(self.name.clone()));
        }
        self.options = options;
        self.value = value;
        self.metrics = metrics;
        Ok(self.derive_offset())
    }

    /// Reconcile only if one of the inputs differs from the current ones.
    pub fn update(
        &mut self,
        options: &[PickerOption],
        value: Option<&Scalar>,
        metrics: ColumnMetrics,
    ) -> PickerResult<Option<Reconciled>> {
        if self.options.as_slice() == options && self.value.as_ref() == value && self.metrics == metrics {
            return Ok(None);
        }
        self.reconcile(options.to_vec(), value.cloned(), metrics).map(Some)
    }

    fn derive_offset(&mut self) -> Reconciled {
        let found = self
            .value
            .as_ref()
            .and_then(|value| self.options.iter().position(|o| &o.value == value));

        let (index, fallback) = match found {
            Some(index) => (index, None),
            None => {
                let err = PickerError::ValueNotFound {
                    column: self.name.clone(),
                    value: self
                        .value
                        .as_ref()
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| "<none>".to_string()),
                };
                log::log_warn(&err.to_string());
                (0, Some(self.options[0].value.clone()))
            }
        };

        self.bounds = self.metrics.bounds(self.options.len());
        self.scroll_offset = self.metrics.offset_for_index(index);

        Reconciled {
            scroll_offset: self.scroll_offset,
            bounds: self.bounds,
            fallback,
        }
    }

    /// Record the pointer anchor. Dragging is confirmed by the first move.
    pub fn on_drag_start(&mut self, pointer_y: f64) {
        self.drag = DragState::Armed {
            anchor_y: pointer_y,
            offset_at_start: self.scroll_offset,
        };
    }

    pub fn on_drag_move(&mut self, pointer_y: f64) -> Propagation {
        match self.drag {
            DragState::Idle => Propagation::Continue,
            DragState::Armed {
                anchor_y,
                offset_at_start,
            } => {
                self.drag = DragState::Dragging {
                    anchor_y,
                    offset_at_start,
                };
                log::log_event(&format!("{}: drag confirmed", self.name));
                Propagation::Stop
            }
            DragState::Dragging {
                anchor_y,
                offset_at_start,
            } => {
                let candidate = offset_at_start + (pointer_y - anchor_y);
                self.scroll_offset = self.bounds.resist(candidate);
                Propagation::Stop
            }
        }
    }

    /// Finish a confirmed drag and schedule the settle notification.
    ///
    /// The offset is left where the pointer released it; the owner's value
    /// change flowing back through [`update`](Self::update) centers it.
    pub fn on_drag_end(&mut self) {
        let was_dragging = self.is_dragging();
        self.drag = DragState::Idle;
        if was_dragging {
            self.settle_pending = true;
        }
    }

    /// Abort a confirmed drag, restoring the offset it started from.
    pub fn on_drag_cancel(&mut self) {
        match self.drag {
            DragState::Dragging {
                offset_at_start, ..
            } => {
                self.scroll_offset = offset_at_start;
                self.drag = DragState::Idle;
                log::log_event(&format!("{}: drag cancelled", self.name));
            }
            DragState::Armed { .. } => self.drag = DragState::Idle,
            DragState::Idle => {}
        }
    }

    /// Select an option directly. Returns the value to report, if any.
    pub fn on_item_tap(&self, option_value: &Scalar) -> Option<Scalar> {
        if self.value.as_ref() == Some(option_value) {
            None
        } else {
            Some(option_value.clone())
        }
    }

    /// Resolve a deferred settle against the offset as last rendered.
    ///
    /// When the settled value is the one already held, no external change
    /// will flow back, so the column re-centers itself.
    pub fn after_render(&mut self) -> Option<Scalar> {
        if !self.settle_pending {
            return None;
        }
        self.settle_pending = false;

        let index = self
            .metrics
            .settle_index(self.scroll_offset, self.options.len());
        let settled = self.options[index].value.clone();
        log::log_event(&format!("{}: settled on index {} ({})", self.name, index, settled));

        if self.value.as_ref() == Some(&settled) {
            self.scroll_offset = self.metrics.offset_for_index(index);
        }
        Some(settled)
    }

    /// Option under a column-relative pointer position.
    pub fn option_at(&self, y: f64) -> Option<&PickerOption> {
        self.metrics
            .index_at(self.scroll_offset, y, self.options.len())
            .map(|index| &self.options[index])
    }

    /// Options overlapping the viewport, top to bottom.
    pub fn visible_items(&self) -> impl Iterator<Item = RenderedItem<'_>> + '_ {
        let item_height = self.metrics.item_height;
        let column_height = self.metrics.column_height;
        self.options
            .iter()
            .enumerate()
            .map(move |(index, option)| RenderedItem {
                index,
                option,
                top: self.scroll_offset + index as f64 * item_height,
                selected: self.value.as_ref() == Some(&option.value),
            })
            .filter(move |item| item.top + item_height > 0.0 && item.top < column_height)
    }
}
