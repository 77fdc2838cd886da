// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Video catalog management.
//!
//! This module provides the read-only set of videos available to a session.
//! Videos are loaded once, either from a catalog file or from the catalog
//! embedded in the binary, and never change afterwards.
//!
//! The catalog file holds one video per line:
//!
//! ```text
//! Amazing Cats | amazing_cats_video_id | #cat , #animal
//! ```

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::model::Video;

const BUILTIN_CATALOG: &str = include_str!("../../data/videos.txt");

/// Read access to a set of videos.
pub(crate) trait VideoCatalog {
    fn get_video(&self, video_id: &str) -> Option<&Video>;

    /// Every video in the catalog, in no particular order.
    fn all_videos(&self) -> Vec<&Video>;
}

pub(crate) struct Catalog {
    videos: HashMap<String, Video>,
}

impl Catalog {
    pub(crate) fn from_videos(videos: Vec<Video>) -> Self {
        let mut map = HashMap::with_capacity(videos.len());
        for video in videos {
            if map.contains_key(&video.id) {
                warn!("Ignoring duplicate video id '{}'", video.id);
                continue;
            }
            map.insert(video.id.clone(), video);
        }

        Self { videos: map }
    }

    /// The catalog shipped with the application.
    pub(crate) fn builtin() -> Self {
        Self::parse(BUILTIN_CATALOG)
    }

    /// Loads a catalog file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read. Malformed lines are
    /// skipped rather than reported as errors.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

        let catalog = Self::parse(&contents);
        debug!("Loaded {} videos from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    pub(crate) fn parse(contents: &str) -> Self {
        let videos = contents
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| parse_line(idx + 1, line))
            .collect();

        Self::from_videos(videos)
    }

    pub(crate) fn len(&self) -> usize {
        self.videos.len()
    }
}

impl VideoCatalog for Catalog {
    fn get_video(&self, video_id: &str) -> Option<&Video> {
        self.videos.get(video_id)
    }

    fn all_videos(&self) -> Vec<&Video> {
        self.videos.values().collect()
    }
}

// Parses `title | id | tag, tag`, the tag field is optional.
fn parse_line(line_number: usize, line: &str) -> Option<Video> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("//") {
        return None;
    }

    let fields: Vec<&str> = line.split('|').map(str::trim).collect();

    match fields.as_slice() {
        [title, id, rest @ ..] if !title.is_empty() && !id.is_empty() => {
            let tags: Vec<&str> = rest
                .first()
                .map(|t| t.split(',').map(str::trim).filter(|t| !t.is_empty()).collect())
                .unwrap_or_default();

            Some(Video::new(*id, *title, &tags))
        }

        _ => {
            warn!("Skipping malformed catalog line {}: '{}'", line_number, line);
            None
        }
    }
}
