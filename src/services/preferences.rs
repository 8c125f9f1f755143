//! Display preferences kept in local storage.
//!
//! Each preference lives in a [`Writable`] whose changes are written back to storage,
//! so the UI only ever sets the store.

use crate::consts::cli_consts::{DARK_MODE_KEY, WEEK_START_KEY};
use crate::storage::LocalStorage;
use crate::store::Writable;
use std::rc::Rc;
use strum::Display;

/// First day of the week.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
pub enum WeekStart {
    Saturday = -1,
    Sunday = 0,
    #[default]
    Monday = 1,
}

impl WeekStart {
    pub fn from_number(value: i32) -> Option<Self> {
        match value {
            -1 => Some(WeekStart::Saturday),
            0 => Some(WeekStart::Sunday),
            1 => Some(WeekStart::Monday),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            WeekStart::Saturday => WeekStart::Sunday,
            WeekStart::Sunday => WeekStart::Monday,
            WeekStart::Monday => WeekStart::Saturday,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Preferences {
    pub dark_mode: Writable<bool>,
    pub week_start: Writable<WeekStart>,
}

impl Preferences {
    /// Loads preferences from `storage` and persists every later change to it.
    ///
    /// A missing or invalid week start falls back to Monday, which is written back.
    pub fn load(storage: Rc<dyn LocalStorage>) -> Self {
        let dark_mode = read_text(storage.as_ref(), DARK_MODE_KEY).as_deref() == Some("true");
        let week_start = read_text(storage.as_ref(), WEEK_START_KEY)
            .and_then(|raw| raw.trim().parse::<i32>().ok())
            .and_then(WeekStart::from_number);

        let preferences = Self {
            dark_mode: Writable::new(dark_mode),
            week_start: Writable::new(week_start.unwrap_or_default()),
        };

        let dark_mode_storage = Rc::clone(&storage);
        preferences.dark_mode.subscribe(move |enabled| {
            let text = if *enabled { "true" } else { "false" };
            if let Err(e) = dark_mode_storage.set_item(DARK_MODE_KEY, text) {
                log::warn!("Failed to persist dark mode: {}", e);
            }
        });
        preferences.week_start.subscribe(move |week_start| {
            if let Err(e) = storage.set_item(WEEK_START_KEY, &(*week_start as i32).to_string()) {
                log::warn!("Failed to persist week start: {}", e);
            }
        });
        preferences
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|enabled| !enabled);
    }
}

fn read_text(storage: &dyn LocalStorage, key: &str) -> Option<String> {
    storage.get_item(key).unwrap_or_else(|e| {
        log::debug!("Could not read '{}': {}", key, e);
        None
    })
}
