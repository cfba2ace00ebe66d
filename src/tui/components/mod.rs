//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `logo` - Colored title line
//! - `picker_view` - Picker container, wheel columns and the highlight band
//! - `status_bar` - Selected values, hotkeys and the last status message

mod logo;
mod picker_view;
mod status_bar;

use std::ops::Range;

use crate::picker::Highlight;

// Re-export all render functions for use in ui.rs
pub use logo::render_logo;
pub use picker_view::{picker_rows, render_picker};
pub use status_bar::{render_hotkeys, render_values};

/// Row showing a label centered at `center_px`. A center on a row boundary
/// goes to the upper row.
pub fn label_row(center_px: f64, cell_height: f64) -> Option<u16> {
    let row = (center_px / cell_height).ceil() - 1.0;
    (row >= 0.0 && row <= f64::from(u16::MAX)).then(|| row as u16)
}

/// Rows whose center lies inside the highlight band.
pub fn band_rows(highlight: Highlight, cell_height: f64) -> Range<u16> {
    let start = (highlight.top / cell_height - 0.5).ceil().max(0.0);
    let end = ((highlight.top + highlight.height) / cell_height - 0.5)
        .ceil()
        .max(start);
    start as u16..end as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_row() {
        assert_eq!(label_row(108.0, 12.0), Some(8));
        assert_eq!(label_row(113.0, 12.0), Some(9));
        assert_eq!(label_row(6.0, 12.0), Some(0));
        assert_eq!(label_row(-10.0, 12.0), None);
    }

    #[test]
    fn test_band_rows_straddle_label_row() {
        let band = band_rows(
            Highlight {
                top: 90.0,
                height: 36.0,
            },
            12.0,
        );
        assert_eq!(band, 7..10);
        assert!(band.contains(&label_row(108.0, 12.0).unwrap()));
    }

    #[test]
    fn test_band_rows_aligned_cells() {
        let band = band_rows(
            Highlight {
                top: 90.0,
                height: 36.0,
            },
            18.0,
        );
        assert_eq!(band, 5..7);
    }
}
