//! Mouse event handling.
//!
//! Presses are hit-tested against the column regions registered during the
//! last render. Once a column owns the gesture, moves and the release are
//! routed to it wherever the pointer goes.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let cell_height = app.config.cell_height();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app
            .interactions
            .column_at(mouse.column, mouse.row)
            .map(|region| Action::PointerDown {
                column: region.id.clone(),
                y: region.pointer_y(mouse.row, cell_height),
            })
            .unwrap_or(Action::None),
        MouseEventKind::Drag(MouseButton::Left) => app
            .drag_owner()
            .and_then(|owner| app.interactions.region(owner))
            .map(|region| Action::PointerMove {
                y: region.pointer_y(mouse.row, cell_height),
            })
            .unwrap_or(Action::None),
        MouseEventKind::Up(MouseButton::Left) => app
            .drag_owner()
            .and_then(|owner| app.interactions.region(owner))
            .map(|region| Action::PointerUp {
                y: region.pointer_y(mouse.row, cell_height),
            })
            .unwrap_or(Action::None),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::app::tests::test_app;
    use crate::tui::interaction::{ClickRegion, InteractiveRegion};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_press_hits_registered_column() {
        let mut app = test_app();
        app.interactions
            .register(InteractiveRegion::column("size", ClickRegion::new(0, 2, 10, 18)));

        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 3, 10)),
            Action::PointerDown {
                column: "size".to_string(),
                y: 102.0,
            }
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 30, 10)),
            Action::None
        );
    }

    #[test]
    fn test_drag_routes_to_owner_outside_its_region() {
        let mut app = test_app();
        app.interactions
            .register(InteractiveRegion::column("size", ClickRegion::new(0, 2, 10, 18)));

        // No owner yet
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Drag(MouseButton::Left), 3, 10)),
            Action::None
        );

        app.dispatch(Action::PointerDown {
            column: "size".to_string(),
            y: 102.0,
        })
        .unwrap();
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Drag(MouseButton::Left), 40, 0)),
            Action::PointerMove { y: -18.0 }
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Up(MouseButton::Left), 40, 0)),
            Action::PointerUp { y: -18.0 }
        );
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut app = test_app();
        app.interactions
            .register(InteractiveRegion::column("size", ClickRegion::new(0, 0, 10, 18)));
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Right), 3, 3)),
            Action::None
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::ScrollDown, 3, 3)),
            Action::None
        );
    }
}
