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

//! Session orchestration.
//!
//! A [`Session`] ties together the video catalog, the playback state and the
//! playlist registry. Every operation either succeeds with a typed outcome or
//! fails with a [`SessionError`] and leaves the session untouched; turning
//! either into text is the job of the command layer.

mod error;

pub(crate) use error::SessionError;

use log::debug;
use rand::{rng, seq::SliceRandom};

use crate::{
    model::{
        Video,
        catalog::VideoCatalog,
        playlist::{Playlist, PlaylistRegistry},
        sort_by_title,
    },
    player::{PauseTransition, PlayerState},
};

/// A video that started playing, and the one stopped to make way for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlayOutcome {
    pub(crate) stopped: Option<Video>,
    pub(crate) playing: Video,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PauseOutcome {
    Paused(Video),
    AlreadyPaused(Video),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NowPlaying {
    pub(crate) video: Video,
    pub(crate) paused: bool,
}

pub(crate) struct Session<C: VideoCatalog> {
    catalog: C,
    player: PlayerState,
    playlists: PlaylistRegistry,
}

impl<C: VideoCatalog> Session<C> {
    pub(crate) fn new(catalog: C) -> Self {
        Self {
            catalog,
            player: PlayerState::default(),
            playlists: PlaylistRegistry::new(),
        }
    }

    pub(crate) fn number_of_videos(&self) -> usize {
        self.catalog.all_videos().len()
    }

    /// All videos sorted by title.
    pub(crate) fn list_videos(&self) -> Vec<Video> {
        self.sorted(|_| true)
    }

    pub(crate) fn search_by_title(&self, term: &str) -> Vec<Video> {
        let term = term.to_lowercase();
        self.sorted(|video| video.title.to_lowercase().contains(&term))
    }

    pub(crate) fn search_by_tag(&self, tag: &str) -> Vec<Video> {
        self.sorted(|video| video.has_tag(tag))
    }

    /// Plays the video the user picked from a numbered list of results.
    ///
    /// `answer` must be a number between 1 and the number of results;
    /// anything else is taken as declining and yields `None`.
    pub(crate) fn play_search_result(
        &mut self,
        results: &[Video],
        answer: &str,
    ) -> Option<Result<PlayOutcome, SessionError>> {
        let index: usize = answer.trim().parse().ok()?;
        let video = results.get(index.checked_sub(1)?)?;

        Some(self.play(&video.id))
    }

    pub(crate) fn play(&mut self, video_id: &str) -> Result<PlayOutcome, SessionError> {
        let playing = self.video(video_id).ok_or(SessionError::NotFound)?;

        let stopped = self.player.play(video_id).and_then(|id| self.video(&id));
        debug!("Playing '{}', stopped {:?}", video_id, stopped.as_ref().map(|v| &v.id));

        Ok(PlayOutcome { stopped, playing })
    }

    pub(crate) fn play_random(&mut self) -> Result<PlayOutcome, SessionError> {
        let mut ids: Vec<String> = self
            .catalog
            .all_videos()
            .into_iter()
            .map(|video| video.id.clone())
            .collect();
        ids.shuffle(&mut rng());

        let video_id = ids.first().ok_or(SessionError::NoVideosAvailable)?;
        self.play(video_id)
    }

    pub(crate) fn stop(&mut self) -> Result<Video, SessionError> {
        let stopped = self.player.stop()?;
        debug!("Stopped '{}'", stopped);

        self.resolve(&stopped)
    }

    pub(crate) fn pause(&mut self) -> Result<PauseOutcome, SessionError> {
        let outcome = match self.player.pause()? {
            PauseTransition::Paused(id) => PauseOutcome::Paused(self.resolve(&id)?),
            PauseTransition::AlreadyPaused(id) => PauseOutcome::AlreadyPaused(self.resolve(&id)?),
        };

        Ok(outcome)
    }

    pub(crate) fn continue_video(&mut self) -> Result<Video, SessionError> {
        let id = self.player.resume()?;
        self.resolve(&id)
    }

    pub(crate) fn show_current(&self) -> Option<NowPlaying> {
        let video = self.video(self.player.current()?)?;

        Some(NowPlaying {
            video,
            paused: self.player.is_paused(),
        })
    }

    pub(crate) fn create_playlist(&mut self, name: &str) -> Result<(), SessionError> {
        self.playlists.create(name)?;
        debug!("Created playlist '{}'", name);
        Ok(())
    }

    pub(crate) fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<Video, SessionError> {
        let playlist = self.playlists.get_mut(name)?;
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(SessionError::VideoNotFound)?;

        playlist.add(video_id)?;
        Ok(video.clone())
    }

    pub(crate) fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> Result<Video, SessionError> {
        let playlist = self.playlists.get_mut(name)?;
        let video = self
            .catalog
            .get_video(video_id)
            .ok_or(SessionError::VideoNotFound)?;

        playlist.remove(video_id)?;
        Ok(video.clone())
    }

    pub(crate) fn clear_playlist(&mut self, name: &str) -> Result<(), SessionError> {
        self.playlists.get_mut(name)?.clear();
        Ok(())
    }

    pub(crate) fn delete_playlist(&mut self, name: &str) -> Result<(), SessionError> {
        let playlist = self.playlists.delete(name)?;
        debug!("Deleted playlist '{}'", playlist.name());
        Ok(())
    }

    /// The videos of a playlist, in playlist order.
    pub(crate) fn show_playlist(&self, name: &str) -> Result<Vec<Video>, SessionError> {
        let playlist = self.playlists.get(name)?;

        Ok(playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.video(id))
            .collect())
    }

    pub(crate) fn playlists(&self) -> Vec<&Playlist> {
        self.playlists.list_all()
    }

    fn sorted(&self, filter: impl Fn(&Video) -> bool) -> Vec<Video> {
        let mut videos: Vec<&Video> = self
            .catalog
            .all_videos()
            .into_iter()
            .filter(|video| filter(*video))
            .collect();
        sort_by_title(&mut videos);

        videos.into_iter().cloned().collect()
    }

    fn video(&self, video_id: &str) -> Option<Video> {
        self.catalog.get_video(video_id).cloned()
    }

    fn resolve(&self, video_id: &str) -> Result<Video, SessionError> {
        self.video(video_id).ok_or(SessionError::NotFound)
    }
}
