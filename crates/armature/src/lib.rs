//! Armature - architecture diagrams as code.
//!
//! Declare labeled nodes, group them into clusters, connect them with
//! directed edges, and render the result to an image file. Layout and
//! rasterization are delegated to the Graphviz `dot` executable; this crate
//! owns the declaration model and the DOT it generates.
//!
//! # Examples
//!
//! ```rust,no_run
//! use armature::{Category, Diagram};
//!
//! let mut diagram = Diagram::new("Web Service");
//!
//! let client = diagram.node("Client", Category::ApiGateway);
//! let api = diagram.node("API", Category::Compute);
//! diagram.connect(client, api);
//!
//! let path = diagram.render().expect("Failed to render");
//! println!("written to {}", path.display());
//! ```

pub mod backend;
pub mod config;

mod category;
mod cluster;
mod color;
mod error;
mod export;
mod graph;

pub use backend::OutputFormat;
pub use category::Category;
pub use cluster::ClusterScope;
pub use color::Color;
pub use error::RenderError;
pub use graph::{Cluster, ClusterId, DiagramGraph, Edge, EdgeId, Node, NodeId};

use std::{fs, path::PathBuf};

use log::{debug, info, trace};

use config::AppConfig;
use export::dot::DotExporter;

/// A diagram under declaration.
///
/// Nodes, clusters, and edges are declared through this type and rendered in
/// one pass by [`Diagram::render`]. Rendering consumes the diagram, so a
/// declared diagram is rendered at most once; everything before that point
/// is infallible.
///
/// # Examples
///
/// ```rust
/// use armature::{Category, Diagram};
///
/// let mut diagram = Diagram::new("Checkout");
///
/// let api = diagram.node("API", Category::ApiGateway);
/// let worker = {
///     let mut functions = diagram.cluster("Functions");
///     functions.node("Worker", Category::Compute)
/// };
/// diagram.connect(api, worker);
///
/// assert_eq!(diagram.graph().node_count(), 2);
/// ```
pub struct Diagram {
    title: String,
    filename: Option<String>,
    format: OutputFormat,
    show: bool,
    config: AppConfig,
    graph: DiagramGraph,
}

impl Diagram {
    /// Creates an empty diagram with the given title.
    ///
    /// The title is drawn on the rendered canvas and, unless overridden with
    /// [`Diagram::with_filename`], determines the output file name.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        debug!(title = title.as_str(); "Declaring diagram");

        Diagram {
            title,
            filename: None,
            format: OutputFormat::default(),
            show: false,
            config: AppConfig::default(),
            graph: DiagramGraph::new(),
        }
    }

    /// Sets the base name of the output file, without extension.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the output format. Defaults to [`OutputFormat::Png`].
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets whether the rendered file is opened in the platform viewer after
    /// writing. Defaults to false.
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Sets the layout and style configuration.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns whether the rendered file will be opened in a viewer.
    pub fn show(&self) -> bool {
        self.show
    }

    /// Returns the layout and style configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the declared graph for inspection.
    pub fn graph(&self) -> &DiagramGraph {
        &self.graph
    }

    pub(crate) fn graph_mut(&mut self) -> &mut DiagramGraph {
        &mut self.graph
    }

    /// Returns the base name of the output file: the configured filename, or
    /// the lowercased underscore-joined title when none was set.
    pub fn filename(&self) -> String {
        match &self.filename {
            Some(filename) => filename.clone(),
            None => slugify(&self.title),
        }
    }

    /// Returns the path the rendered file will be written to, relative to
    /// the current working directory.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.filename(), self.format.extension()))
    }

    /// Declares a top-level node with the given label and category.
    ///
    /// Labels are display text, not identity: two nodes may carry the same
    /// label and remain distinct. The returned [`NodeId`] is the handle for
    /// connecting this node later.
    pub fn node(&mut self, label: impl Into<String>, category: Category) -> NodeId {
        let label = label.into();
        debug!(label = label.as_str(), category:? = category; "Declaring node");
        self.graph.add_node(label, category, None)
    }

    /// Opens a cluster and returns the scope for declaring its members.
    ///
    /// The scope exclusively borrows the diagram; see [`ClusterScope`] for
    /// the scoping rules.
    pub fn cluster(&mut self, label: impl Into<String>) -> ClusterScope<'_> {
        let label = label.into();
        debug!(label = label.as_str(); "Opening cluster scope");
        let id = self.graph.add_cluster(label, None);
        ClusterScope::new(self, id)
    }

    /// Declares a directed edge from `source` to `target`.
    ///
    /// Duplicate edges are kept and drawn as separate arrows.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        trace!(source:? = source, target:? = target; "Declaring edge");
        self.graph.add_edge(source, target)
    }

    /// Generates the DOT source for the current declarations.
    ///
    /// This is the exact text the backend receives at render time, exposed
    /// for inspection and testing.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] when the style configuration holds an
    /// invalid color.
    pub fn dot_source(&self) -> Result<String, RenderError> {
        let source = DotExporter::new(self).export_source()?;
        trace!(source = source.as_str(); "Generated DOT source");
        Ok(source)
    }

    /// Renders the diagram and writes it to [`Diagram::output_path`].
    ///
    /// Consumes the diagram: exports the declarations to DOT, pipes the
    /// source through Graphviz (except for [`OutputFormat::Dot`], which is
    /// written as-is), and writes the result in one step so that a failed
    /// render leaves no partial file behind. When [`Diagram::with_show`] was
    /// set, the written file is then opened in the platform viewer.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] for invalid style configuration,
    /// [`RenderError::BackendMissing`] when the `dot` executable is not on
    /// the search path, [`RenderError::Backend`] when Graphviz fails, and
    /// [`RenderError::Io`] when the output path cannot be written.
    pub fn render(self) -> Result<PathBuf, RenderError> {
        info!(
            title = self.title.as_str(),
            output_format:? = self.format,
            nodes = self.graph.node_count(),
            clusters = self.graph.cluster_count(),
            edges = self.graph.edge_count();
            "Rendering diagram"
        );

        let source = self.dot_source()?;
        let bytes = if self.format.requires_backend() {
            backend::render_image(source, self.format)?
        } else {
            source.into_bytes()
        };

        let output_path = self.output_path();
        fs::write(&output_path, bytes)?;
        info!(path = output_path.display().to_string(); "Diagram written");

        if self.show {
            backend::open_in_viewer(&output_path);
        }

        Ok(output_path)
    }
}

/// Lowercases a title and joins its whitespace-separated words with
/// underscores. Falls back to `diagram` for whitespace-only titles.
fn slugify(title: &str) -> String {
    let slug = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    if slug.is_empty() {
        "diagram".to_string()
    } else {
        slug
    }
}
