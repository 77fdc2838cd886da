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

//! Command-line input logic.
//!
//! This module implements the interactive prompt: it reads a line at a time,
//! parses it into an [`AppCommand`] and dispatches it to the session until
//! the user exits or input runs out.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info};
use thiserror::Error;

use crate::{
    actions::commands::{AppCommand, Flow, handle_command},
    model::catalog::VideoCatalog,
    session::Session,
};

const PROMPT: &str = "VIDCLI> ";

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown,

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub(crate) struct Commander {
    prompt: bool,
}

impl Commander {
    /// A commander that writes a prompt before each command when `prompt` is
    /// set, which only makes sense for an interactive terminal.
    pub(crate) fn new(prompt: bool) -> Self {
        Self { prompt }
    }

    /// Reads and runs commands until `EXIT` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub(crate) fn run<C: VideoCatalog>(
        &self,
        session: &mut Session<C>,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<()> {
        writeln!(out, "Hello and welcome to the video player, type HELP for a list of available commands.")?;

        loop {
            if self.prompt {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }

            let mut buffer = String::new();
            let read = input.read_line(&mut buffer).context("Failed to read command")?;
            if read == 0 {
                debug!("End of input");
                break;
            }

            let buffer = buffer.trim();
            if buffer.is_empty() {
                continue;
            }

            match parse_command(buffer) {
                Ok(command) => {
                    if handle_command(session, command, input, out)? == Flow::Exit {
                        break;
                    }
                }
                Err(e) => {
                    info!("Rejected input '{}': {:?}", buffer, e);
                    writeln!(out, "{}", e)?;
                }
            }
        }

        writeln!(out, "Video player is now exiting, goodbye!")?;
        Ok(())
    }
}

/// Parses one line of input into a command.
///
/// The command word is matched without regard to case; arguments are kept
/// exactly as typed.
pub(crate) fn parse_command(buffer: &str) -> Result<AppCommand, ParseError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();
    let Some((word, args)) = parts.split_first() else {
        return Err(ParseError::Unknown);
    };

    let command = match (word.to_uppercase().as_str(), args) {
        ("NUMBER_OF_VIDEOS", []) => AppCommand::NumberOfVideos,
        ("SHOW_ALL_VIDEOS", []) => AppCommand::ShowAllVideos,

        ("PLAY", [video_id]) => AppCommand::Play(video_id.to_string()),
        ("PLAY", _) => return Err(ParseError::Usage("PLAY <video_id>")),
        ("PLAY_RANDOM", []) => AppCommand::PlayRandom,
        ("STOP", []) => AppCommand::Stop,
        ("PAUSE", []) => AppCommand::Pause,
        ("CONTINUE", []) => AppCommand::Continue,
        ("SHOW_PLAYING", []) => AppCommand::ShowPlaying,

        ("CREATE_PLAYLIST", [name]) => AppCommand::CreatePlaylist(name.to_string()),
        ("CREATE_PLAYLIST", _) => return Err(ParseError::Usage("CREATE_PLAYLIST <playlist_name>")),
        ("ADD_TO_PLAYLIST", [name, video_id]) => {
            AppCommand::AddToPlaylist(name.to_string(), video_id.to_string())
        }
        ("ADD_TO_PLAYLIST", _) => {
            return Err(ParseError::Usage("ADD_TO_PLAYLIST <playlist_name> <video_id>"));
        }
        ("REMOVE_FROM_PLAYLIST", [name, video_id]) => {
            AppCommand::RemoveFromPlaylist(name.to_string(), video_id.to_string())
        }
        ("REMOVE_FROM_PLAYLIST", _) => {
            return Err(ParseError::Usage("REMOVE_FROM_PLAYLIST <playlist_name> <video_id>"));
        }
        ("CLEAR_PLAYLIST", [name]) => AppCommand::ClearPlaylist(name.to_string()),
        ("CLEAR_PLAYLIST", _) => return Err(ParseError::Usage("CLEAR_PLAYLIST <playlist_name>")),
        ("DELETE_PLAYLIST", [name]) => AppCommand::DeletePlaylist(name.to_string()),
        ("DELETE_PLAYLIST", _) => return Err(ParseError::Usage("DELETE_PLAYLIST <playlist_name>")),
        ("SHOW_PLAYLIST", [name]) => AppCommand::ShowPlaylist(name.to_string()),
        ("SHOW_PLAYLIST", _) => return Err(ParseError::Usage("SHOW_PLAYLIST <playlist_name>")),
        ("SHOW_ALL_PLAYLISTS", []) => AppCommand::ShowAllPlaylists,

        ("SEARCH_VIDEOS", [_, ..]) => AppCommand::SearchVideos(args.join(" ")),
        ("SEARCH_VIDEOS", []) => return Err(ParseError::Usage("SEARCH_VIDEOS <search_term>")),
        ("SEARCH_VIDEOS_WITH_TAG", [tag]) => AppCommand::SearchVideosWithTag(tag.to_string()),
        ("SEARCH_VIDEOS_WITH_TAG", _) => {
            return Err(ParseError::Usage("SEARCH_VIDEOS_WITH_TAG <tag_name>"));
        }

        ("FLAG_VIDEO", [video_id]) => AppCommand::FlagVideo(video_id.to_string(), None),
        ("FLAG_VIDEO", [video_id, reason @ ..]) => {
            AppCommand::FlagVideo(video_id.to_string(), Some(reason.join(" ")))
        }
        ("ALLOW_VIDEO", [video_id]) => AppCommand::AllowVideo(video_id.to_string()),

        ("HELP", _) => AppCommand::Help,
        ("EXIT" | "QUIT", _) => AppCommand::Exit,

        // unknown command, or a known one with unexpected arguments
        _ => return Err(ParseError::Unknown),
    };

    Ok(command)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::model::catalog::Catalog;

    #[test]
    fn test_command_word_ignores_case() {
        assert_eq!(parse_command("play_random"), Ok(AppCommand::PlayRandom));
        assert_eq!(
            parse_command("Play amazing_cats_video_id"),
            Ok(AppCommand::Play("amazing_cats_video_id".to_string()))
        );
    }

    #[test]
    fn test_arguments_keep_their_case() {
        assert_eq!(
            parse_command("ADD_TO_PLAYLIST My_List Vid"),
            Ok(AppCommand::AddToPlaylist("My_List".to_string(), "Vid".to_string()))
        );
        assert_eq!(
            parse_command("SEARCH_VIDEOS about nothing"),
            Ok(AppCommand::SearchVideos("about nothing".to_string()))
        );
    }

    #[test]
    fn test_flag_reason_is_optional() {
        assert_eq!(
            parse_command("FLAG_VIDEO v1"),
            Ok(AppCommand::FlagVideo("v1".to_string(), None))
        );
        assert_eq!(
            parse_command("FLAG_VIDEO v1 dont like"),
            Ok(AppCommand::FlagVideo("v1".to_string(), Some("dont like".to_string())))
        );
    }

    #[test]
    fn test_wrong_arity_reports_usage() {
        assert_eq!(parse_command("PLAY"), Err(ParseError::Usage("PLAY <video_id>")));
        assert_eq!(
            parse_command("ADD_TO_PLAYLIST only_name"),
            Err(ParseError::Usage("ADD_TO_PLAYLIST <playlist_name> <video_id>"))
        );
    }

    #[test]
    fn test_unknown_commands_are_rejected() {
        assert!(matches!(parse_command("DANCE"), Err(ParseError::Unknown)));
        assert!(matches!(parse_command("STOP now"), Err(ParseError::Unknown)));
        assert!(matches!(parse_command(""), Err(ParseError::Unknown)));
    }

    #[test]
    fn test_run_until_exit() {
        let mut session = Session::new(Catalog::builtin());
        let mut input = Cursor::new(b"NUMBER_OF_VIDEOS\n\nbogus\nEXIT\nSTOP\n".to_vec());
        let mut out = Vec::new();

        Commander::new(false).run(&mut session, &mut input, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "5 videos in the library");
        assert!(lines[2].starts_with("Please enter a valid command"));
        assert_eq!(lines[3], "Video player is now exiting, goodbye!");
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut session = Session::new(Catalog::builtin());
        let mut input = Cursor::new(b"PLAY funny_dogs_video_id".to_vec());
        let mut out = Vec::new();

        Commander::new(true).run(&mut session, &mut input, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("VIDCLI> Playing video: Funny Dogs\n"));
        assert!(output.ends_with("Video player is now exiting, goodbye!\n"));
    }
}
