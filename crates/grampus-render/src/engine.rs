//! The Graphviz subprocess boundary.
//!
//! The engine is acquired and released within a single [`run`] call. The DOT
//! source is fed on stdin so no intermediate file is written; the engine
//! writes the image itself via `-o`.

use crate::{Error, Result};
use grampus_core::OutputFormat;
use std::io::Write;
use std::path::Path;
use std::process::{Child, Command, Output, Stdio};

pub(crate) const ENGINE: &str = "dot";

pub(crate) fn run(dot_source: &str, format: OutputFormat, out_path: &Path) -> Result<()> {
    run_with(ENGINE, dot_source, format, out_path)
}

fn run_with(engine: &str, dot_source: &str, format: OutputFormat, out_path: &Path) -> Result<()> {
    tracing::debug!(
        engine,
        format = format.extension(),
        out = %out_path.display(),
        "invoking layout engine"
    );

    let spawned = Command::new(engine)
        .arg(format!("-T{}", format.extension()))
        .arg("-o")
        .arg(out_path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => Error::EngineMissing {
                engine: engine.to_string(),
            },
            _ => Error::Io(err),
        })?;
    let mut child = EngineChild::new(spawned);

    // The stdin handle must drop before waiting so the engine sees EOF.
    if let Some(mut stdin) = child.take_stdin() {
        if let Err(err) = stdin.write_all(dot_source.as_bytes()) {
            if err.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(Error::Io(err));
            }
            // A broken pipe means the engine quit early; report its status below.
        }
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        // No partial output: the engine may have created or truncated the
        // file before failing.
        let _ = std::fs::remove_file(out_path);
        return Err(Error::EngineFailed {
            engine: engine.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    tracing::debug!(out = %out_path.display(), "layout engine finished");
    Ok(())
}

/// Owns the engine child between spawn and wait. Early exits kill and reap
/// the child so a failed render never leaves a process behind.
struct EngineChild {
    child: Option<Child>,
}

impl EngineChild {
    fn new(child: Child) -> Self {
        Self { child: Some(child) }
    }

    fn take_stdin(&mut self) -> Option<std::process::ChildStdin> {
        self.child.as_mut().and_then(|c| c.stdin.take())
    }

    fn wait_with_output(mut self) -> std::io::Result<Output> {
        match self.child.take() {
            Some(child) => child.wait_with_output(),
            None => Err(std::io::Error::other("engine child already reaped")),
        }
    }
}

impl Drop for EngineChild {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_available() -> bool {
        Command::new(ENGINE)
            .arg("-V")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    #[test]
    fn a_missing_engine_is_reported_as_engine_missing() {
        let err = run_with(
            "grampus-no-such-layout-engine",
            "digraph {}",
            OutputFormat::Png,
            Path::new("unused.png"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::EngineMissing { .. }));
    }

    #[test]
    fn a_failed_layout_leaves_no_output_file() {
        if !engine_available() {
            eprintln!("skipping: graphviz `{ENGINE}` is not on PATH");
            return;
        }
        let tmp = tempfile::tempdir().expect("tempdir");
        let out = tmp.path().join("broken.png");
        let err = run("this is not a graph", OutputFormat::Png, &out).unwrap_err();
        assert!(matches!(err, Error::EngineFailed { .. }));
        assert!(!out.exists(), "partial output was left behind");
    }

    #[test]
    fn a_trivial_graph_renders() {
        if !engine_available() {
            eprintln!("skipping: graphviz `{ENGINE}` is not on PATH");
            return;
        }
        let tmp = tempfile::tempdir().expect("tempdir");
        let out = tmp.path().join("ok.png");
        run("digraph { a -> b; }", OutputFormat::Png, &out).expect("render");
        let meta = std::fs::metadata(&out).expect("output metadata");
        assert!(meta.len() > 0);
    }
}
