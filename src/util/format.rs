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

use crate::model::Video;

/// Formats a list of tags as a bracketed, space separated string.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_tags(&["#cat".into(), "#animal".into()]), "[#cat #animal]");
/// assert_eq!(format_tags(&[]), "[]");
/// ```
pub(crate) fn format_tags(tags: &[String]) -> String {
    format!("[{}]", tags.join(" "))
}

/// Formats a video as `Title (id) [tags]`.
pub(crate) fn format_video(video: &Video) -> String {
    format!("{} ({}) {}", video.title, video.id, format_tags(&video.tags))
}
