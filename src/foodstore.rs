//! Persistence layer for mealpicker. The food list lives in a single plain-text
//! file as whitespace-separated tokens and is always read and written whole.

use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Contents written to a freshly created backing file.
pub const DEFAULT_FOODS: &str = "土豆牛柳盖浇饭 宫保鸡丁盖浇饭 火鸡面 炸鸡 食堂 拼好饭 炒面 炒饭 馄饨 饺子 粥 牛肉面 西红柿鸡蛋面 火鸡面配炸鸡";

/// Failures while touching the backing file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file could not be created or overwritten
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Handle to the backing file of the food list.
#[derive(Debug, Clone)]
pub struct FoodStore {
    path: PathBuf,
}

impl FoodStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every token of the backing file, in file order.
    ///
    /// ### Errors
    /// * `StoreError::Read` - If the file is missing or unreadable
    pub fn load(&self) -> Result<Vec<String>, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_foods(&content))
    }

    /// Overwrites the backing file with `foods` joined by single spaces.
    ///
    /// ### Arguments
    /// * `foods` - The complete list to persist
    pub fn save(&self, foods: &[String]) -> Result<(), StoreError> {
        self.write(&foods.join(" "))?;
        log::debug!("saved {} foods to {}", foods.len(), self.path.display());
        Ok(())
    }

    /// Seeds the backing file with [`DEFAULT_FOODS`] unless it already exists.
    ///
    /// Returns `true` when a new file was written.
    pub fn ensure_default(&self) -> Result<bool, StoreError> {
        if self.path.exists() {
            return Ok(false);
        }

        self.write(DEFAULT_FOODS)?;
        log::info!("created {} with the default menu", self.path.display());
        Ok(true)
    }

    fn write(&self, content: &str) -> Result<(), StoreError> {
        let to_error = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_error)?;
        }

        fs::write(&self.path, content).map_err(to_error)
    }
}

/// Splits file content into food tokens. Any run of whitespace, newlines
/// included, separates two entries.
pub fn parse_foods(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

/// Chooses one entry uniformly at random, or `None` for an empty list.
pub fn pick_food<'a, R: Rng + ?Sized>(foods: &'a [String], rng: &mut R) -> Option<&'a str> {
    foods.choose(rng).map(String::as_str)
}
