#![forbid(unsafe_code)]

//! Declarative diagram sessions (headless).
//!
//! A [`DiagramSession`] collects labelled nodes, nested clusters, and styled
//! edges declared by a script, and nothing else: layout and rasterization are
//! delegated to the external Graphviz engine by `grampus-render`. Sessions
//! are single-threaded and write-once; once rendered, the session is gone.

pub mod catalog;
pub mod config;
pub mod diagram;
pub mod error;

pub use catalog::{Category, Provider};
pub use config::{DiagramOptions, Direction, OutputFormat, SplineMode, Theme};
pub use diagram::{Cluster, DiagramSession, Edge, EdgeDir, EdgeStyle, LineStyle, Node, NodeRef};
pub use error::{Error, Result};
