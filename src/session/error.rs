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

use thiserror::Error;

/// Expected, recoverable failures of a session operation.
///
/// The display text is the reason shown to the user after the
/// `Cannot <action>:` prefix.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub(crate) enum SessionError {
    /// The video to play is not in the catalog.
    #[error("Video does not exist")]
    NotFound,

    #[error("No video is currently playing")]
    NoActiveVideo,

    #[error("Video is not paused")]
    NotPaused,

    #[error("A playlist with the same name already exists")]
    DuplicateName,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    /// The video named in a playlist operation is not in the catalog.
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Video already added")]
    DuplicateVideo,

    #[error("Video is not in playlist")]
    VideoNotInPlaylist,

    #[error("No videos are available")]
    NoVideosAvailable,
}
