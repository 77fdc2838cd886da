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

//! Playback state management.
//!
//! This module tracks the single video selected for playback and whether it
//! is paused. The state only deals in video identifiers; resolving them to
//! catalog entries is left to the session.

use crate::session::SessionError;

/// Represents the current playback status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum PlayerState {
    #[default]
    Idle,
    Playing(String),
    Paused(String),
}

/// Result of a successful pause request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PauseTransition {
    Paused(String),
    AlreadyPaused(String),
}

impl PlayerState {
    /// The selected video, playing or paused.
    pub(crate) fn current(&self) -> Option<&str> {
        match self {
            PlayerState::Idle => None,
            PlayerState::Playing(id) | PlayerState::Paused(id) => Some(id),
        }
    }

    pub(crate) fn is_paused(&self) -> bool {
        matches!(self, PlayerState::Paused(_))
    }

    /// Selects a new video for playback.
    ///
    /// Returns the identifier of the video that was stopped to make way for
    /// it, if any. The caller must have checked that `video_id` exists.
    pub(crate) fn play(&mut self, video_id: &str) -> Option<String> {
        let stopped = self.stop().ok();
        *self = PlayerState::Playing(video_id.to_string());
        stopped
    }

    pub(crate) fn stop(&mut self) -> Result<String, SessionError> {
        match std::mem::take(self) {
            PlayerState::Idle => Err(SessionError::NoActiveVideo),
            PlayerState::Playing(id) | PlayerState::Paused(id) => Ok(id),
        }
    }

    pub(crate) fn pause(&mut self) -> Result<PauseTransition, SessionError> {
        match self {
            PlayerState::Idle => Err(SessionError::NoActiveVideo),
            PlayerState::Paused(id) => Ok(PauseTransition::AlreadyPaused(id.clone())),
            PlayerState::Playing(id) => {
                let id = id.clone();
                *self = PlayerState::Paused(id.clone());
                Ok(PauseTransition::Paused(id))
            }
        }
    }

    pub(crate) fn resume(&mut self) -> Result<String, SessionError> {
        match self {
            PlayerState::Idle => Err(SessionError::NoActiveVideo),
            PlayerState::Playing(_) => Err(SessionError::NotPaused),
            PlayerState::Paused(id) => {
                let id = id.clone();
                *self = PlayerState::Playing(id.clone());
                Ok(id)
            }
        }
    }
}
