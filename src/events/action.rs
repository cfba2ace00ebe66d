//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or tested
//! without a terminal.

/// Actions that can be dispatched from event handlers.
///
/// Pointer positions are column-relative pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Quit the application
    Quit,

    // === Pointer gestures ===
    /// Pointer pressed on a column
    PointerDown { column: String, y: f64 },
    /// Pointer moved while pressed
    PointerMove { y: f64 },
    /// Pointer released (drag end, or a tap if it never moved)
    PointerUp { y: f64 },
    /// Abort the active gesture
    CancelGesture,

    // === No-op ===
    /// No action to take
    None,
}
