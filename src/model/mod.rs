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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the videos
//! supplied by the catalog and the playlists that reference them.

pub(crate) mod catalog;
pub(crate) mod playlist;

/// A single immutable video record owned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Video {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) tags: Vec<String>,
}

impl Video {
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>, tags: &[&str]) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !unique.iter().any(|t| t == tag) {
                unique.push(tag.to_string());
            }
        }

        Self {
            id: id.into(),
            title: title.into(),
            tags: unique,
        }
    }

    pub(crate) fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Sorts videos by title, ties broken by identifier.
pub(crate) fn sort_by_title(videos: &mut [&Video]) {
    videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_tags_are_dropped_in_order() {
        let video = Video::new("v1", "Amy", &["#b", "#a", "#b"]);
        assert_eq!(video.tags, vec!["#b".to_string(), "#a".to_string()]);
    }

    #[test]
    fn test_sort_by_title_breaks_ties_by_id() {
        let a = Video::new("z", "Same", &[]);
        let b = Video::new("a", "Same", &[]);
        let c = Video::new("m", "Alpha", &[]);
        let mut videos = vec![&a, &b, &c];
        sort_by_title(&mut videos);

        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["m", "a", "z"]);
    }
}
