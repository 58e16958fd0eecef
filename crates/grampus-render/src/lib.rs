#![forbid(unsafe_code)]

//! Rendering backend for grampus diagram sessions.
//!
//! The session's graph is serialized to DOT and handed to the external
//! Graphviz engine (`dot`), which computes the layout and writes the image.
//! This crate never lays anything out itself.

pub mod dot;
mod engine;
mod palette;

use grampus_core::DiagramSession;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the layout engine `{engine}` was not found on PATH; install graphviz to render diagrams")]
    EngineMissing { engine: String },

    #[error("the layout engine `{engine}` exited with {status}: {stderr}")]
    EngineFailed {
        engine: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("render I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Lays out and renders the session's graph, consuming the session.
///
/// The image is written to the working directory as `<stem>.<ext>`, where the
/// stem comes from [`DiagramSession::output_stem`] and the extension from the
/// configured output format. Returns the written path.
pub fn render(session: DiagramSession) -> Result<PathBuf> {
    render_in(session, Path::new("."))
}

/// Like [`render`], but writes into `dir` instead of the working directory.
pub fn render_in(session: DiagramSession, dir: &Path) -> Result<PathBuf> {
    let format = session.options().format;
    let out_path = dir.join(format!("{}.{}", session.output_stem(), format.extension()));
    let source = dot::dot_source(&session);
    tracing::debug!(
        title = session.title(),
        nodes = session.nodes().len(),
        edges = session.edges().len(),
        "handing diagram to the layout engine"
    );
    engine::run(&source, format, &out_path)?;
    Ok(out_path)
}
