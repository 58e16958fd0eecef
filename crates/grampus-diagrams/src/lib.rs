#![forbid(unsafe_code)]

//! Shared plumbing for the RouteClouds diagram scripts.
//!
//! Each binary in this crate embeds one diagram description literally and
//! renders it into the working directory. The scripts take no arguments and
//! exit non-zero when the builder rejects the description or the layout
//! engine is unavailable.

use grampus_core::{DiagramOptions, Direction, SplineMode, Theme};
use std::path::PathBuf;

/// House style shared by the RouteClouds diagrams: dark sans-serif text on
/// white, orthogonal edges, generous rank spacing.
pub fn house_theme() -> Theme {
    Theme {
        font_name: "Sans-Serif".to_string(),
        font_color: "#2D3436".to_string(),
        background: "white".to_string(),
        title_font_size: 20,
        node_font_size: 12,
        edge_font_size: 10,
        pad: 0.5,
        node_sep: 0.8,
        rank_sep: 1.2,
        splines: SplineMode::Ortho,
        node_width: 1.4,
        node_height: 1.4,
    }
}

pub fn house_options(direction: Direction) -> DiagramOptions {
    DiagramOptions::new()
        .with_direction(direction)
        .with_theme(house_theme())
}

#[derive(Debug)]
pub enum ScriptError {
    Build(grampus_core::Error),
    Render(grampus_render::Error),
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScriptError::Build(err) => write!(f, "{err}"),
            ScriptError::Render(err) => write!(f, "{err}"),
        }
    }
}

impl From<grampus_core::Error> for ScriptError {
    fn from(value: grampus_core::Error) -> Self {
        Self::Build(value)
    }
}

impl From<grampus_render::Error> for ScriptError {
    fn from(value: grampus_render::Error) -> Self {
        Self::Render(value)
    }
}

pub type ScriptResult = Result<Vec<PathBuf>, ScriptError>;

/// Prints the written paths, or the error followed by a non-zero exit.
pub fn finish(result: ScriptResult) {
    match result {
        Ok(paths) => {
            for path in paths {
                println!("wrote {}", path.display());
            }
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
