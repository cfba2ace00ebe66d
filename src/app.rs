//! Application state: the owner of the picker's values.
//!
//! The picker only reports [`ValueChange`]s. `App` applies them to its value
//! groups, lets the group source reshape the options, and feeds both back to
//! the picker through [`App::sync`].

use crate::config::Config;
use crate::demo::GroupSource;
use crate::error::Result;
use crate::events::Action;
use crate::log;
use crate::picker::{OptionGroups, Picker, ValueChange, ValueGroups};
use crate::tui::interaction::InteractionRegistry;

/// Sync passes before giving up on fallbacks converging
const MAX_SYNC_PASSES: usize = 3;

pub struct App {
    pub config: Config,
    pub picker: Picker,
    pub interactions: InteractionRegistry,
    pub should_quit: bool,
    /// Last message for the status bar
    pub status: Option<String>,
    source: GroupSource,
    option_groups: OptionGroups,
    value_groups: ValueGroups,
    /// Column holding the pointer between press and release
    drag_owner: Option<String>,
}

impl App {
    pub fn new(config: Config, source: GroupSource, mut value_groups: ValueGroups) -> Result<Self> {
        let metrics = config.metrics()?;
        let picker = Picker::new(metrics.item_height, metrics.column_height)?;
        let option_groups = source.option_groups(&mut value_groups);

        let mut app = Self {
            config,
            picker,
            interactions: InteractionRegistry::new(),
            should_quit: false,
            status: None,
            source,
            option_groups,
            value_groups,
            drag_owner: None,
        };
        app.sync()?;
        Ok(app)
    }

    pub fn option_groups(&self) -> &OptionGroups {
        &self.option_groups
    }

    pub fn value_groups(&self) -> &ValueGroups {
        &self.value_groups
    }

    pub fn drag_owner(&self) -> Option<&str> {
        self.drag_owner.as_deref()
    }

    /// Record a selection reported by the picker.
    pub fn apply_change(&mut self, change: ValueChange) {
        log::log_event(&format!("{} -> {}", change.name, change.value));
        self.status = Some(format!("{} → {}", change.name, change.value));
        self.value_groups.insert(change.name, change.value);
        self.option_groups = self.source.option_groups(&mut self.value_groups);
    }

    /// Hand the current groups to the picker, applying fallback selections
    /// until every column holds a value it contains.
    pub fn sync(&mut self) -> Result<()> {
        for _ in 0..MAX_SYNC_PASSES {
            let fallbacks = self.picker.sync(&self.option_groups, &self.value_groups)?;
            if fallbacks.is_empty() {
                return Ok(());
            }
            for change in fallbacks {
                self.apply_change(change);
            }
        }
        log::log_warn("picker values did not settle after fallback");
        Ok(())
    }

    /// Resolve deferred settles after a frame was drawn.
    ///
    /// Returns true if any value changed, in which case the caller should
    /// sync and draw again before waiting for input.
    pub fn after_render(&mut self) -> bool {
        let changes = self.picker.after_render();
        let changed = !changes.is_empty();
        for change in changes {
            self.apply_change(change);
        }
        changed
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::PointerDown { column, y } => {
                // A second press without a release replaces the old gesture
                self.cancel_gesture()?;
                self.picker.drag_start(&column, y)?;
                self.drag_owner = Some(column);
            }
            Action::PointerMove { y } => {
                if let Some(owner) = &self.drag_owner {
                    let _ = self.picker.drag_move(owner, y)?;
                }
            }
            Action::PointerUp { y } => {
                if let Some(owner) = self.drag_owner.take() {
                    let was_dragging = self
                        .picker
                        .column(&owner)
                        .is_some_and(|column| column.is_dragging());
                    self.picker.drag_end(&owner)?;
                    if !was_dragging {
                        if let Some(change) = self.picker.tap(&owner, y)? {
                            self.apply_change(change);
                        }
                    }
                }
            }
            Action::CancelGesture => self.cancel_gesture()?,
            Action::None => {}
        }
        Ok(())
    }

    fn cancel_gesture(&mut self) -> Result<()> {
        if let Some(owner) = self.drag_owner.take() {
            self.picker.drag_cancel(&owner)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::demo::{self, DAY, MONTH};
    use crate::picker::{DEFAULT_HEIGHT, DEFAULT_ITEM_HEIGHT, PickerOption, Scalar};

    /// Default metrics pinned so WHEELPICK_* variables can't leak in
    pub(crate) fn test_config() -> Config {
        Config::default().with_overrides(Some(DEFAULT_ITEM_HEIGHT), Some(DEFAULT_HEIGHT))
    }

    /// A single "size" column resting on "m"
    pub(crate) fn test_app() -> App {
        let mut groups = OptionGroups::new();
        groups.insert(
            "size".to_string(),
            vec![
                PickerOption::new("s", "Small"),
                PickerOption::new("m", "Medium"),
                PickerOption::new("l", "Large"),
                PickerOption::new("xl", "Extra large"),
            ],
        );
        let mut values = ValueGroups::new();
        values.insert("size".to_string(), Scalar::from("m"));
        App::new(test_config(), GroupSource::Static(groups), values).unwrap()
    }

    fn date_app(y: i32, m: u32, d: u32) -> App {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        App::new(
            test_config(),
            GroupSource::Date {
                first_year: 2000,
                last_year: 2040,
            },
            demo::date_values(date),
        )
        .unwrap()
    }

    fn drag(app: &mut App, column: &str, from: f64, to: f64) {
        app.dispatch(Action::PointerDown {
            column: column.to_string(),
            y: from,
        })
        .unwrap();
        app.dispatch(Action::PointerMove { y: from }).unwrap();
        app.dispatch(Action::PointerMove { y: to }).unwrap();
        app.dispatch(Action::PointerUp { y: to }).unwrap();
    }

    #[test]
    fn test_missing_value_falls_back_on_start() {
        let mut groups = OptionGroups::new();
        groups.insert(
            "letter".to_string(),
            vec![PickerOption::new(1, "A"), PickerOption::new(2, "B")],
        );
        let mut values = ValueGroups::new();
        values.insert("letter".to_string(), Scalar::from(99));

        let app = App::new(test_config(), GroupSource::Static(groups), values).unwrap();
        assert_eq!(app.value_groups()["letter"], Scalar::from(1));
        assert_eq!(app.picker.column("letter").unwrap().value(), Some(&Scalar::from(1)));
    }

    #[test]
    fn test_drag_settles_after_render() {
        let mut app = test_app();
        drag(&mut app, "size", 100.0, 64.0);

        // Nothing is reported until the frame is committed
        assert_eq!(app.value_groups()["size"], Scalar::from("m"));
        assert!(app.after_render());
        assert_eq!(app.value_groups()["size"], Scalar::from("l"));

        app.sync().unwrap();
        let column = app.picker.column("size").unwrap();
        assert_eq!(column.scroll_offset(), app.picker.metrics().offset_for_index(2));
        assert!(!app.after_render());
    }

    #[test]
    fn test_press_and_release_is_a_tap() {
        let mut app = test_app();
        // "m" rests at 90..126, so 140 lands on "l"
        app.dispatch(Action::PointerDown {
            column: "size".to_string(),
            y: 140.0,
        })
        .unwrap();
        app.dispatch(Action::PointerUp { y: 140.0 }).unwrap();

        assert_eq!(app.value_groups()["size"], Scalar::from("l"));
        assert!(app.drag_owner().is_none());
        assert!(!app.after_render());
    }

    #[test]
    fn test_cancel_restores_offset() {
        let mut app = test_app();
        let before = app.picker.column("size").unwrap().scroll_offset();

        app.dispatch(Action::PointerDown {
            column: "size".to_string(),
            y: 100.0,
        })
        .unwrap();
        app.dispatch(Action::PointerMove { y: 100.0 }).unwrap();
        app.dispatch(Action::PointerMove { y: 10.0 }).unwrap();
        app.dispatch(Action::CancelGesture).unwrap();

        assert_eq!(app.picker.column("size").unwrap().scroll_offset(), before);
        assert!(app.drag_owner().is_none());
        // A late release is ignored
        app.dispatch(Action::PointerUp { y: 10.0 }).unwrap();
        assert!(!app.after_render());
        assert_eq!(app.value_groups()["size"], Scalar::from("m"));
    }

    #[test]
    fn test_month_change_reshapes_days() {
        let mut app = date_app(2023, 1, 31);
        assert_eq!(app.option_groups()[DAY].len(), 31);

        // Jan rests centered; one item up selects Feb
        drag(&mut app, MONTH, 100.0, 64.0);
        assert!(app.after_render());
        app.sync().unwrap();

        assert_eq!(app.value_groups()[MONTH], Scalar::from(2));
        assert_eq!(app.value_groups()[DAY], Scalar::from(28));
        assert_eq!(app.picker.column(DAY).unwrap().options().len(), 28);
        assert_eq!(
            demo::selected_date(app.value_groups()),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        app.dispatch(Action::Quit).unwrap();
        assert!(app.should_quit);
    }
}
