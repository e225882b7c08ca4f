use crate::domain::device::{Device, Purpose};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_range;
use serde::Serialize;
use std::hash::{Hash, Hasher};

pub const MIN_VOLUME_DB: f64 = 0.0;
/// Loudness above which listening becomes harmful.
pub const UNSAFE_VOLUME_DB: f64 = 85.0;

#[derive(Debug, Clone, Serialize)]
pub struct MediaPlayer {
    song_count: u32,
    max_volume_db: f64,
}

impl MediaPlayer {
    pub const PURPOSE: Purpose = Purpose::Music;

    pub fn new(song_count: u32, max_volume_db: f64) -> Result<Self> {
        validate_range("max_volume_db", max_volume_db, MIN_VOLUME_DB, UNSAFE_VOLUME_DB)?;
        tracing::debug!(song_count, max_volume_db, "constructed media player");
        Ok(Self {
            song_count,
            max_volume_db,
        })
    }

    pub fn song_count(&self) -> u32 {
        self.song_count
    }

    pub fn set_song_count(&mut self, song_count: u32) {
        self.song_count = song_count;
    }

    pub fn add_song(&mut self) -> Result<()> {
        self.song_count = self.song_count.checked_add(1).ok_or_else(|| {
            CatalogError::invalid_argument("song_count", "Song library is full")
        })?;
        Ok(())
    }

    pub fn remove_song(&mut self) -> Result<()> {
        self.song_count = self.song_count.checked_sub(1).ok_or_else(|| {
            CatalogError::invalid_argument("song_count", "No stored songs to remove")
        })?;
        Ok(())
    }

    pub fn max_volume_db(&self) -> f64 {
        self.max_volume_db
    }
}

impl Device for MediaPlayer {
    fn purpose(&self) -> Purpose {
        Self::PURPOSE
    }

    fn describe(&self) -> String {
        format!(
            "Number of stored songs: {}\nMax volume decibel: {:.6}\n",
            self.song_count, self.max_volume_db
        )
    }
}

impl PartialEq for MediaPlayer {
    fn eq(&self, other: &Self) -> bool {
        self.song_count == other.song_count
    }
}

impl Eq for MediaPlayer {}

impl Hash for MediaPlayer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.song_count.hash(state);
    }
}
