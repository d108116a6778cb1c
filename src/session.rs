//! Edit session over an in-memory copy of the food list. Every mutation is
//! written straight through to the backing file, so the session never holds
//! unsaved changes.

use std::time::{Duration, Instant};

use crate::foodstore::{FoodStore, StoreError};

/// Result of a single editing action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The list changed and was written to disk
    Persisted,
    /// The list changed in memory but writing it failed
    PersistFailed,
    /// Input was blank, nothing happened
    Ignored,
    /// Remove was requested without a selected entry
    NothingSelected,
}

/// Kind of feedback shown on the editor's status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Saved,
    SaveFailed(String),
}

/// Transient feedback after an auto-save.
///
/// A success message carries a deadline and disappears on the first
/// [`StatusLine::tick`] past it; a failure message stays until replaced.
#[derive(Debug)]
pub struct StatusLine {
    current: Option<Status>,
    clear_at: Option<Instant>,
    clear_after: Duration,
}

impl StatusLine {
    pub fn new(clear_after: Duration) -> Self {
        Self {
            current: None,
            clear_at: None,
            clear_after,
        }
    }

    pub fn current(&self) -> Option<&Status> {
        self.current.as_ref()
    }

    pub fn set_saved(&mut self, now: Instant) {
        self.current = Some(Status::Saved);
        self.clear_at = Some(now + self.clear_after);
    }

    pub fn set_failed(&mut self, message: String) {
        self.current = Some(Status::SaveFailed(message));
        self.clear_at = None;
    }

    /// Drops an expired message. Called once per event loop iteration.
    pub fn tick(&mut self, now: Instant) {
        if self.clear_at.is_some_and(|deadline| now >= deadline) {
            self.current = None;
            self.clear_at = None;
        }
    }
}

/// State of an open editor: the working list, the highlighted entry and the
/// auto-save status.
#[derive(Debug)]
pub struct EditSession {
    store: FoodStore,
    foods: Vec<String>,
    selected: Option<usize>,
    status: StatusLine,
}

impl EditSession {
    /// Opens a session seeded from the current file contents.
    ///
    /// ### Errors
    /// * `StoreError::Read` - The backing file could not be loaded; no
    ///   session is created
    pub fn open(store: FoodStore, clear_after: Duration) -> Result<Self, StoreError> {
        let foods = store.load()?;
        Ok(Self {
            store,
            foods,
            selected: None,
            status: StatusLine::new(clear_after),
        })
    }

    pub fn foods(&self) -> &[String] {
        &self.foods
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.current()
    }

    /// Highlights the entry at `index`; out-of-range indices clear the selection.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.foods.len()).then_some(index);
    }

    /// Move the selection down, wrapping to the top
    pub fn select_next(&mut self) {
        if self.foods.is_empty() {
            return;
        }
        let next = match self.selected {
            Some(current) if current + 1 < self.foods.len() => current + 1,
            _ => 0,
        };
        self.select(next);
    }

    /// Move the selection up, wrapping to the bottom
    pub fn select_previous(&mut self) {
        if self.foods.is_empty() {
            return;
        }
        let previous = match self.selected {
            Some(current) if current > 0 => current - 1,
            _ => self.foods.len() - 1,
        };
        self.select(previous);
    }

    /// Appends a trimmed food name and saves the list.
    ///
    /// Blank input is ignored. Duplicates are allowed.
    pub fn add(&mut self, name: &str, now: Instant) -> EditOutcome {
        let name = name.trim();
        if name.is_empty() {
            return EditOutcome::Ignored;
        }

        self.foods.push(name.to_string());
        log::info!("added {name:?}");
        self.auto_save(now)
    }

    /// Removes the selected entry and saves the list.
    pub fn remove_selected(&mut self, now: Instant) -> EditOutcome {
        let Some(index) = self.selected.filter(|&i| i < self.foods.len()) else {
            return EditOutcome::NothingSelected;
        };

        let removed = self.foods.remove(index);
        self.selected = None;
        log::info!("removed {removed:?}");
        self.auto_save(now)
    }

    /// Writes the list one final time. The caller closes the editor on `Ok`.
    pub fn save_and_close(&self) -> Result<(), StoreError> {
        self.store.save(&self.foods)
    }

    /// Expires the status message when its timer has run out.
    pub fn tick(&mut self, now: Instant) {
        self.status.tick(now);
    }

    fn auto_save(&mut self, now: Instant) -> EditOutcome {
        match self.store.save(&self.foods) {
            Ok(()) => {
                self.status.set_saved(now);
                EditOutcome::Persisted
            }
            Err(e) => {
                log::error!("auto-save failed: {e}");
                self.status.set_failed(e.to_string());
                EditOutcome::PersistFailed
            }
        }
    }
}
