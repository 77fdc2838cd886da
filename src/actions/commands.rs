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

//! Application command processing.
//!
//! This module implements the command pattern used to drive a [`Session`].
//! Each [`AppCommand`] is run against the session and its outcome, success or
//! [`SessionError`], is written out as a line of text. Session errors are
//! reported and never end the session; only I/O failures are propagated.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use crate::{
    model::{Video, catalog::VideoCatalog},
    session::{PauseOutcome, PlayOutcome, Session, SessionError},
    util::format::format_video,
};

const SEARCH_PROMPT: &str = "Would you like to play any of the above? If yes, specify the number of the video.\nIf your answer is not a valid number, we will assume it's a no.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AppCommand {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist(String, String),
    RemoveFromPlaylist(String, String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo(String, Option<String>),
    AllowVideo(String),
    Help,
    Exit,
}

/// Whether the command loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Runs a single command and writes its outcome to `out`.
///
/// `input` is only read by the search commands, which ask which of the
/// results to play.
///
/// # Errors
///
/// Returns an error if writing to `out` or reading from `input` fails.
pub(crate) fn handle_command<C: VideoCatalog>(
    session: &mut Session<C>,
    command: AppCommand,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Flow> {
    debug!("Handling {:?}", command);

    match command {
        AppCommand::NumberOfVideos => {
            writeln!(out, "{} videos in the library", session.number_of_videos())?;
        }
        AppCommand::ShowAllVideos => {
            writeln!(out, "Here's a list of all available videos:")?;
            write_videos(out, &session.list_videos())?;
        }
        AppCommand::Play(video_id) => match session.play(&video_id) {
            Ok(outcome) => write_play(out, &outcome)?,
            Err(e) => write_error(out, "play video", e)?,
        },
        AppCommand::PlayRandom => match session.play_random() {
            Ok(outcome) => write_play(out, &outcome)?,
            Err(e) => write_error(out, "play video", e)?,
        },
        AppCommand::Stop => match session.stop() {
            Ok(video) => writeln!(out, "Stopping video: {}", video.title)?,
            Err(e) => write_error(out, "stop video", e)?,
        },
        AppCommand::Pause => match session.pause() {
            Ok(PauseOutcome::Paused(video)) => writeln!(out, "Pausing video: {}", video.title)?,
            Ok(PauseOutcome::AlreadyPaused(video)) => {
                writeln!(out, "Video already paused: {}", video.title)?
            }
            Err(e) => write_error(out, "pause video", e)?,
        },
        AppCommand::Continue => match session.continue_video() {
            Ok(video) => writeln!(out, "Continuing video: {}", video.title)?,
            Err(e) => write_error(out, "continue video", e)?,
        },
        AppCommand::ShowPlaying => match session.show_current() {
            Some(now) => {
                let paused = if now.paused { " - PAUSED" } else { "" };
                writeln!(out, "Currently playing: {}{}", format_video(&now.video), paused)?
            }
            None => writeln!(out, "No video is currently playing")?,
        },
        AppCommand::CreatePlaylist(name) => match session.create_playlist(&name) {
            Ok(()) => writeln!(out, "Successfully created new playlist: {}", name)?,
            Err(e) => write_error(out, "create playlist", e)?,
        },
        AppCommand::AddToPlaylist(name, video_id) => {
            match session.add_to_playlist(&name, &video_id) {
                Ok(video) => writeln!(out, "Added video to {}: {}", name, video.title)?,
                Err(e) => write_error(out, &format!("add video to {}", name), e)?,
            }
        }
        AppCommand::RemoveFromPlaylist(name, video_id) => {
            match session.remove_from_playlist(&name, &video_id) {
                Ok(video) => writeln!(out, "Removed video from {}: {}", name, video.title)?,
                Err(e) => write_error(out, &format!("remove video from {}", name), e)?,
            }
        }
        AppCommand::ClearPlaylist(name) => match session.clear_playlist(&name) {
            Ok(()) => writeln!(out, "Successfully removed all videos from {}", name)?,
            Err(e) => write_error(out, &format!("clear playlist {}", name), e)?,
        },
        AppCommand::DeletePlaylist(name) => match session.delete_playlist(&name) {
            Ok(()) => writeln!(out, "Deleted playlist: {}", name)?,
            Err(e) => write_error(out, &format!("delete playlist {}", name), e)?,
        },
        AppCommand::ShowPlaylist(name) => match session.show_playlist(&name) {
            Ok(videos) => {
                writeln!(out, "Showing playlist: {}", name)?;
                if videos.is_empty() {
                    writeln!(out, "  No videos here yet")?;
                } else {
                    write_videos(out, &videos)?;
                }
            }
            Err(e) => write_error(out, &format!("show playlist {}", name), e)?,
        },
        AppCommand::ShowAllPlaylists => {
            let playlists = session.playlists();
            if playlists.is_empty() {
                writeln!(out, "No playlists exist yet")?;
            } else {
                writeln!(out, "Showing all playlists:")?;
                for playlist in playlists {
                    writeln!(out, "  {}", playlist.name())?;
                }
            }
        }
        AppCommand::SearchVideos(term) => {
            let results = session.search_by_title(&term);
            search_and_play(session, &term, results, input, out)?;
        }
        AppCommand::SearchVideosWithTag(tag) => {
            let results = session.search_by_tag(&tag);
            search_and_play(session, &tag, results, input, out)?;
        }
        AppCommand::FlagVideo(video_id, reason) => {
            debug!("Flagging {} ({:?}) is not supported", video_id, reason);
            writeln!(out, "flag_video needs implementation")?;
        }
        AppCommand::AllowVideo(video_id) => {
            debug!("Allowing {} is not supported", video_id);
            writeln!(out, "allow_video needs implementation")?;
        }
        AppCommand::Help => write_help(out)?,
        AppCommand::Exit => return Ok(Flow::Exit),
    }

    Ok(Flow::Continue)
}

// Lists the results, then offers to play one of them. Declining, or running
// out of input, plays nothing.
fn search_and_play<C: VideoCatalog>(
    session: &mut Session<C>,
    query: &str,
    results: Vec<Video>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    if results.is_empty() {
        writeln!(out, "No search results for {}", query)?;
        return Ok(());
    }

    writeln!(out, "Here are the results for {}:", query)?;
    for (idx, video) in results.iter().enumerate() {
        writeln!(out, "  {}) {}", idx + 1, format_video(video))?;
    }
    writeln!(out, "{}", SEARCH_PROMPT)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    match session.play_search_result(&results, &answer) {
        Some(Ok(outcome)) => write_play(out, &outcome)?,
        Some(Err(e)) => write_error(out, "play video", e)?,
        None => {}
    }

    Ok(())
}

fn write_play(out: &mut impl Write, outcome: &PlayOutcome) -> Result<()> {
    if let Some(stopped) = &outcome.stopped {
        writeln!(out, "Stopping video: {}", stopped.title)?;
    }
    writeln!(out, "Playing video: {}", outcome.playing.title)?;
    Ok(())
}

fn write_videos(out: &mut impl Write, videos: &[Video]) -> Result<()> {
    for video in videos {
        writeln!(out, "  {}", format_video(video))?;
    }
    Ok(())
}

fn write_error(out: &mut impl Write, action: &str, error: SessionError) -> Result<()> {
    writeln!(out, "Cannot {}: {}", action, error)?;
    Ok(())
}

fn write_help(out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, url and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::model::catalog::Catalog;

    fn session() -> Session<Catalog> {
        Session::new(Catalog::builtin())
    }

    // Runs the commands in order and returns everything written.
    fn run(session: &mut Session<Catalog>, commands: Vec<AppCommand>, input: &str) -> String {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        for command in commands {
            handle_command(session, command, &mut input, &mut out).unwrap();
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_show_all_videos_is_sorted_with_tags() {
        let output = run(&mut session(), vec![AppCommand::ShowAllVideos], "");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Here's a list of all available videos:");
        assert_eq!(lines[1], "  Amazing Cats (amazing_cats_video_id) [#cat #animal]");
        assert_eq!(lines[5], "  Video about nothing (nothing_video_id) []");
    }

    #[test]
    fn test_play_stop_messages() {
        let output = run(
            &mut session(),
            vec![
                AppCommand::Play("amazing_cats_video_id".into()),
                AppCommand::Play("funny_dogs_video_id".into()),
                AppCommand::Stop,
                AppCommand::Stop,
                AppCommand::Play("nope".into()),
            ],
            "",
        );

        assert_eq!(
            output,
            "Playing video: Amazing Cats
Stopping video: Amazing Cats
Playing video: Funny Dogs
Stopping video: Funny Dogs
Cannot stop video: No video is currently playing
Cannot play video: Video does not exist
"
        );
    }

    #[test]
    fn test_pause_continue_and_show_playing() {
        let output = run(
            &mut session(),
            vec![
                AppCommand::ShowPlaying,
                AppCommand::Play("amazing_cats_video_id".into()),
                AppCommand::Continue,
                AppCommand::Pause,
                AppCommand::Pause,
                AppCommand::ShowPlaying,
                AppCommand::Continue,
            ],
            "",
        );

        assert_eq!(
            output,
            "No video is currently playing
Playing video: Amazing Cats
Cannot continue video: Video is not paused
Pausing video: Amazing Cats
Video already paused: Amazing Cats
Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED
Continuing video: Amazing Cats
"
        );
    }

    #[test]
    fn test_playlist_messages() {
        let output = run(
            &mut session(),
            vec![
                AppCommand::ShowAllPlaylists,
                AppCommand::CreatePlaylist("My_Playlist".into()),
                AppCommand::CreatePlaylist("my_playlist".into()),
                AppCommand::AddToPlaylist("my_PLAYLIST".into(), "amazing_cats_video_id".into()),
                AppCommand::AddToPlaylist("my_playlist".into(), "amazing_cats_video_id".into()),
                AppCommand::AddToPlaylist("another".into(), "amazing_cats_video_id".into()),
                AppCommand::ShowPlaylist("my_playlist".into()),
                AppCommand::ShowAllPlaylists,
                AppCommand::RemoveFromPlaylist("my_playlist".into(), "funny_dogs_video_id".into()),
                AppCommand::RemoveFromPlaylist("my_playlist".into(), "amazing_cats_video_id".into()),
                AppCommand::ShowPlaylist("my_playlist".into()),
                AppCommand::ClearPlaylist("my_playlist".into()),
                AppCommand::DeletePlaylist("my_playlist".into()),
                AppCommand::DeletePlaylist("my_playlist".into()),
            ],
            "",
        );

        assert_eq!(
            output,
            "No playlists exist yet
Successfully created new playlist: My_Playlist
Cannot create playlist: A playlist with the same name already exists
Added video to my_PLAYLIST: Amazing Cats
Cannot add video to my_playlist: Video already added
Cannot add video to another: Playlist does not exist
Showing playlist: my_playlist
  Amazing Cats (amazing_cats_video_id) [#cat #animal]
Showing all playlists:
  My_Playlist
Cannot remove video from my_playlist: Video is not in playlist
Removed video from my_playlist: Amazing Cats
Showing playlist: my_playlist
  No videos here yet
Successfully removed all videos from my_playlist
Deleted playlist: my_playlist
Cannot delete playlist my_playlist: Playlist does not exist
"
        );
    }

    #[test]
    fn test_search_plays_the_chosen_result() {
        let mut session = session();
        let output = run(&mut session, vec![AppCommand::SearchVideos("cat".into())], "2\n");

        assert!(output.starts_with(
            "Here are the results for cat:
  1) Amazing Cats (amazing_cats_video_id) [#cat #animal]
  2) Another Cat Video (another_cat_video_id) [#cat #animal]
"
        ));
        assert!(output.ends_with("Playing video: Another Cat Video\n"));
        assert_eq!(session.show_current().unwrap().video.id, "another_cat_video_id");
    }

    #[test]
    fn test_search_ignores_invalid_answers() {
        let mut session = session();
        let output = run(
            &mut session,
            vec![
                AppCommand::SearchVideosWithTag("#cat".into()),
                AppCommand::SearchVideosWithTag("#cat".into()),
                AppCommand::SearchVideosWithTag("#cat".into()),
            ],
            "no\n3\n",
        );

        assert!(!output.contains("Playing video"));
        assert_eq!(session.show_current(), None);
    }

    #[test]
    fn test_search_without_results() {
        let output = run(&mut session(), vec![AppCommand::SearchVideosWithTag("#CAT".into())], "");
        assert_eq!(output, "No search results for #CAT\n");
    }

    #[test]
    fn test_exit_ends_the_loop() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let flow = handle_command(&mut session(), AppCommand::Exit, &mut input, &mut out).unwrap();
        assert_eq!(flow, Flow::Exit);
    }
}
