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

//! Named playlist management.
//!
//! A [`Playlist`] is an ordered list of video identifiers with no repeats.
//! Playlists live in a [`PlaylistRegistry`] which looks them up by name
//! without regard to case, while each playlist keeps the name exactly as it
//! was first given.

use std::collections::BTreeMap;

use crate::session::SessionError;

#[derive(Debug, Clone)]
pub(crate) struct Playlist {
    name: String,
    video_ids: Vec<String>,
}

impl Playlist {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            video_ids: Vec::new(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    pub(crate) fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    pub(crate) fn add(&mut self, video_id: &str) -> Result<(), SessionError> {
        if self.contains(video_id) {
            return Err(SessionError::DuplicateVideo);
        }

        self.video_ids.push(video_id.to_string());
        Ok(())
    }

    pub(crate) fn remove(&mut self, video_id: &str) -> Result<(), SessionError> {
        let idx = self
            .video_ids
            .iter()
            .position(|id| id == video_id)
            .ok_or(SessionError::VideoNotInPlaylist)?;

        // Vec::remove shifts the tail down, keeping the remaining order.
        self.video_ids.remove(idx);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.video_ids.clear();
    }
}

/// All playlists of a session, keyed by case-folded name.
#[derive(Debug, Default)]
pub(crate) struct PlaylistRegistry {
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn create(&mut self, name: &str) -> Result<(), SessionError> {
        let key = fold(name);
        if self.playlists.contains_key(&key) {
            return Err(SessionError::DuplicateName);
        }

        self.playlists.insert(key, Playlist::new(name));
        Ok(())
    }

    pub(crate) fn get(&self, name: &str) -> Result<&Playlist, SessionError> {
        self.playlists
            .get(&fold(name))
            .ok_or(SessionError::PlaylistNotFound)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Result<&mut Playlist, SessionError> {
        self.playlists
            .get_mut(&fold(name))
            .ok_or(SessionError::PlaylistNotFound)
    }

    pub(crate) fn delete(&mut self, name: &str) -> Result<Playlist, SessionError> {
        self.playlists
            .remove(&fold(name))
            .ok_or(SessionError::PlaylistNotFound)
    }

    /// Playlists ordered by case-folded name.
    pub(crate) fn list_all(&self) -> Vec<&Playlist> {
        self.playlists.values().collect()
    }
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_case_insensitive() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Movies").unwrap();

        assert_eq!(registry.create("movies").unwrap_err(), SessionError::DuplicateName);
        assert_eq!(registry.get("MOVIES").unwrap().name(), "Movies");
        assert_eq!(registry.list_all().len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicates() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Fun").unwrap();

        let playlist = registry.get_mut("fun").unwrap();
        playlist.add("v1").unwrap();
        assert_eq!(playlist.add("v1").unwrap_err(), SessionError::DuplicateVideo);
        assert_eq!(playlist.video_ids(), ["v1".to_string()]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Fun").unwrap();

        let playlist = registry.get_mut("Fun").unwrap();
        for id in ["a", "b", "c", "d"] {
            playlist.add(id).unwrap();
        }
        playlist.remove("b").unwrap();

        assert_eq!(playlist.video_ids(), ["a", "c", "d"].map(String::from));
        assert_eq!(playlist.remove("b").unwrap_err(), SessionError::VideoNotInPlaylist);
    }

    #[test]
    fn test_clear_keeps_the_playlist() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Fun").unwrap();

        let playlist = registry.get_mut("Fun").unwrap();
        playlist.add("a").unwrap();
        playlist.clear();
        playlist.clear();

        assert!(registry.get("fun").unwrap().video_ids().is_empty());
    }

    #[test]
    fn test_delete_removes_the_entry() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Fun").unwrap();

        assert_eq!(registry.delete("FUN").unwrap().name(), "Fun");
        assert_eq!(registry.get("Fun").unwrap_err(), SessionError::PlaylistNotFound);
        assert_eq!(registry.delete("Fun").unwrap_err(), SessionError::PlaylistNotFound);
    }

    #[test]
    fn test_list_all_orders_by_folded_name() {
        let mut registry = PlaylistRegistry::new();
        for name in ["zebra", "Apple", "mango"] {
            registry.create(name).unwrap();
        }

        let names: Vec<&str> = registry.list_all().into_iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Apple", "mango", "zebra"]);
    }
}
