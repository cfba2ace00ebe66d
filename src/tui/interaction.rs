//! Hit testing for picker columns.
//!
//! Columns register their screen regions during render, and mouse events are
//! routed to whichever column contains the pointer. Regions are rebuilt every
//! frame, so they always match what is on screen.
//!
//! # Example
//!
//! ```ignore
//! // During render, register each column:
//! registry.register(InteractiveRegion::column("month", ClickRegion::new(x, y, width, height)));
//!
//! // Later, on a mouse press:
//! if let Some(region) = registry.column_at(mouse.column, mouse.row) {
//!     let y = region.pointer_y(mouse.row, cell_height);
//! }
//! ```

use ratatui::layout::Rect;

/// A rectangle in terminal cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

impl From<Rect> for ClickRegion {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// A screen region owned by one picker column.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Name of the column owning this region
    pub id: String,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,
}

impl InteractiveRegion {
    pub fn column(id: impl Into<String>, bounds: ClickRegion) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }

    /// Region-relative pointer position in pixels, taken at the row center.
    ///
    /// Rows outside the region give positions outside `[0, height)`, which
    /// keeps a drag tracking after the pointer leaves the column.
    pub fn pointer_y(&self, row: u16, cell_height: f64) -> f64 {
        (f64::from(row) - f64::from(self.bounds.y) + 0.5) * cell_height
    }
}

/// Registry of column regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Column region containing (x, y). Columns never overlap.
    pub fn column_at(&self, x: u16, y: u16) -> Option<&InteractiveRegion> {
        self.regions.iter().find(|r| r.contains(x, y))
    }

    /// Region registered for a column
    pub fn region(&self, id: &str) -> Option<&InteractiveRegion> {
        self.regions.iter().find(|r| r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region = InteractiveRegion::column("test", ClickRegion::new(10, 10, 20, 10));

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_column_at_routes_to_containing_column() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::column("year", ClickRegion::new(0, 0, 14, 18)));
        registry.register(InteractiveRegion::column("month", ClickRegion::new(14, 0, 14, 18)));

        assert_eq!(registry.column_at(3, 5).map(|r| r.id.as_str()), Some("year"));
        assert_eq!(registry.column_at(14, 17).map(|r| r.id.as_str()), Some("month"));
        assert!(registry.column_at(28, 5).is_none());
        assert!(registry.column_at(3, 18).is_none());
    }

    #[test]
    fn test_pointer_y_is_region_relative() {
        let region = InteractiveRegion::column("day", ClickRegion::new(0, 4, 10, 18));
        assert_eq!(region.pointer_y(4, 12.0), 6.0);
        assert_eq!(region.pointer_y(6, 12.0), 30.0);
        // Above the region
        assert_eq!(region.pointer_y(2, 12.0), -18.0);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::column("year", ClickRegion::new(0, 0, 8, 8)));
        registry.register(InteractiveRegion::column("month", ClickRegion::new(8, 0, 8, 8)));

        assert_eq!(registry.region("month").map(|r| r.bounds.x), Some(8));
        assert!(registry.region("day").is_none());

        registry.clear();
        assert!(registry.is_empty());
    }
}
