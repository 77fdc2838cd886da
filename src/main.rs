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

//! # Video Player Simulator.
//!
//! A command-driven simulator for browsing a fixed catalog of videos.
//!
//! The application plays, pauses and stops a single video at a time and
//! manages named playlists of videos from the catalog. Nothing is really
//! played and nothing is kept between runs.
//!
//! ## Architecture
//!
//! * The **Catalog** supplies immutable video records, loaded once at start
//!   up from a catalog file or from the catalog built into the binary.
//! * The **Session** owns the playback state and the playlists and applies
//!   each operation atomically, returning a typed outcome or error.
//! * The **Commander** reads commands from standard input, runs them against
//!   the session and writes the results to standard output.
//!
//! Logging goes to standard error so it never mixes with command output.

mod actions;
mod commander;
mod config;
mod model;
mod player;
mod session;
mod util;

use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info};

use crate::{commander::Commander, config::AppConfig, model::catalog::Catalog, session::Session};

#[derive(Parser, Debug)]
#[command(name = "vidcli")]
#[command(about = "A command-driven video player simulator")]
struct Cli {
    /// Catalog file to load, overriding the configured one.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

/// The entry point of the application.
///
/// Initialises logging, loads the configuration and the catalog, then hands
/// control to the [`Commander`] until the user exits.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config();

    init_logging(&cli, &config);

    let catalog = load_catalog(&cli, &config).context("Failed to load video catalog")?;
    info!("Catalog ready with {} videos", catalog.len());

    let mut session = Session::new(catalog);

    let stdin = io::stdin();
    let commander = Commander::new(stdin.is_terminal());

    commander
        .run(&mut session, &mut stdin.lock(), &mut io::stdout().lock())
        .context("Application error occurred")
}

fn init_logging(cli: &Cli, config: &AppConfig) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config.level_filter()
    };

    let mut clog = colog::default_builder();
    clog.filter(None, level);
    clog.init();
}

fn load_catalog(cli: &Cli, config: &AppConfig) -> Result<Catalog> {
    let path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog_file.as_ref().map(PathBuf::from));

    match path {
        Some(path) => Catalog::load(&path),
        None => Ok(Catalog::builtin()),
    }
}
