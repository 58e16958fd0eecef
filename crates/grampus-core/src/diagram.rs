use crate::catalog::Category;
use crate::config::DiagramOptions;
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// A declared node. Immutable once registered.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub label: String,
    pub category: Category,
    /// Index into the session's cluster list, captured from the scope stack
    /// at declaration time. `None` for top-level nodes.
    pub cluster: Option<usize>,
}

/// A named visual grouping. Labels need not be unique.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub label: String,
    pub parent: Option<usize>,
}

/// Arrowhead placement, using the engine's `dir` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeDir {
    #[default]
    Forward,
    Back,
    Both,
    None,
}

impl EdgeDir {
    pub fn as_dot(self) -> &'static str {
        match self {
            EdgeDir::Forward => "forward",
            EdgeDir::Back => "back",
            EdgeDir::Both => "both",
            EdgeDir::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Bold,
}

impl LineStyle {
    pub fn as_dot(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::Bold => "bold",
        }
    }
}

/// Optional attributes attached to every edge a `connect` call records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeStyle {
    pub label: Option<String>,
    pub color: Option<String>,
    pub line: LineStyle,
    pub dir: EdgeDir,
}

impl EdgeStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }

    pub fn with_dir(mut self, dir: EdgeDir) -> Self {
        self.dir = dir;
        self
    }
}

/// One recorded relation. Endpoints are indices into the node registry.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub style: EdgeStyle,
}

/// Handle returned by [`DiagramSession::node`]. Name-like, so it can be
/// passed straight back to [`DiagramSession::connect`].
#[derive(Debug, Clone)]
pub struct NodeRef {
    name: String,
}

impl NodeRef {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl AsRef<str> for NodeRef {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

/// A diagram under construction.
///
/// Lifecycle: [`DiagramSession::open`] → declare nodes/clusters/edges →
/// `grampus_render::render` (which consumes the session). Node names are
/// unique across the whole diagram so that `connect` can resolve endpoints
/// unambiguously by name.
#[derive(Debug)]
pub struct DiagramSession {
    title: String,
    options: DiagramOptions,
    nodes: IndexMap<String, Node>,
    clusters: Vec<Cluster>,
    scope: Vec<usize>,
    edges: Vec<Edge>,
}

impl DiagramSession {
    /// Begins a diagram. Fails with [`Error::Configuration`] when the options
    /// are unusable (zero font sizes, blank filename, or no usable output
    /// stem at all).
    pub fn open(title: impl Into<String>, options: DiagramOptions) -> Result<Self> {
        let title = title.into();
        options.validate(&title)?;
        Ok(Self {
            title,
            options,
            nodes: IndexMap::new(),
            clusters: Vec::new(),
            scope: Vec::new(),
            edges: Vec::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &DiagramOptions {
        &self.options
    }

    pub fn nodes(&self) -> &IndexMap<String, Node> {
        &self.nodes
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The output file stem: the configured filename, or the slugged title.
    pub fn output_stem(&self) -> String {
        match &self.options.filename {
            Some(name) => name.trim().to_string(),
            None => slugify(&self.title),
        }
    }

    /// Registers a node in the active cluster scope.
    pub fn node(
        &mut self,
        name: impl Into<String>,
        category: Category,
        label: impl Into<String>,
    ) -> Result<NodeRef> {
        let name = name.into();
        if self.nodes.contains_key(&name) {
            return Err(Error::DuplicateName { name });
        }
        let node = Node {
            name: name.clone(),
            label: label.into(),
            category,
            cluster: self.scope.last().copied(),
        };
        self.nodes.insert(name.clone(), node);
        Ok(NodeRef { name })
    }

    /// Opens a nested grouping scope; nodes declared until the matching
    /// [`DiagramSession::end_cluster`] belong to it.
    pub fn begin_cluster(&mut self, label: impl Into<String>) {
        let parent = self.scope.last().copied();
        self.clusters.push(Cluster {
            label: label.into(),
            parent,
        });
        self.scope.push(self.clusters.len() - 1);
    }

    pub fn end_cluster(&mut self) -> Result<()> {
        match self.scope.pop() {
            Some(_) => Ok(()),
            None => Err(Error::ScopeUnderflow),
        }
    }

    /// Records one edge per pair in the cross-product `from × to`.
    ///
    /// Endpoints are resolved by name before anything is recorded, so a call
    /// that names an undeclared node fails without appending any edge.
    pub fn connect<F, T>(&mut self, from: F, to: T, style: EdgeStyle) -> Result<()>
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let from = self.resolve_all(from)?;
        let to = self.resolve_all(to)?;
        for &f in &from {
            for &t in &to {
                self.edges.push(Edge {
                    from: f,
                    to: t,
                    style: style.clone(),
                });
            }
        }
        Ok(())
    }

    /// Single-pair convenience over [`DiagramSession::connect`].
    pub fn edge(
        &mut self,
        from: impl AsRef<str>,
        to: impl AsRef<str>,
        style: EdgeStyle,
    ) -> Result<()> {
        self.connect([from.as_ref()], [to.as_ref()], style)
    }

    fn resolve_all<I>(&self, names: I) -> Result<Vec<usize>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.resolve(name.as_ref()))
            .collect()
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        self.nodes
            .get_index_of(name)
            .ok_or_else(|| Error::UnknownNode {
                name: name.to_string(),
            })
    }
}

/// The upstream naming rule for default output stems: lowercase the title and
/// join whitespace runs with underscores.
pub(crate) fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
