//! DOT generation for declared diagrams.
//!
//! [`DotExporter`] walks the diagram graph and builds a `dot-structures`
//! AST: graph-wide attribute defaults first, then top-level nodes, then
//! clusters as nested `cluster_`-prefixed subgraphs, then every edge in
//! declaration order. Category fill colors and the rotating cluster
//! background palette are applied here, so the emitted AST is entirely
//! self-describing and the backend needs no further styling input.

use dot_generator::{attr, id, node_id};
use dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id, Node, NodeId, Stmt, Subgraph, Vertex,
};
use graphviz_rust::printer::PrinterContext;

use crate::{Diagram, error::RenderError, graph};

/// Background fills for clusters, rotated by nesting depth.
const CLUSTER_FILLS: [&str; 4] = ["#E5F5FD", "#EBF3E7", "#ECE8F6", "#FDF7E3"];

/// Pen color for cluster borders.
const CLUSTER_BORDER: &str = "#AEB6BE";

/// Font color for the diagram title.
const TITLE_FONT_COLOR: &str = "#2D3436";

/// Builds the DOT AST for one diagram.
pub(crate) struct DotExporter<'a> {
    diagram: &'a Diagram,
}

impl<'a> DotExporter<'a> {
    pub(crate) fn new(diagram: &'a Diagram) -> Self {
        DotExporter { diagram }
    }

    /// Exports the diagram as a directed DOT graph.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Config`] when the style configuration holds a
    /// color that cannot be parsed.
    pub(crate) fn export(&self) -> Result<Graph, RenderError> {
        let mut stmts = vec![
            Stmt::GAttribute(GraphAttributes::Graph(self.graph_attributes()?)),
            Stmt::GAttribute(GraphAttributes::Node(self.node_defaults())),
        ];

        let graph = self.diagram.graph();
        for node in graph.top_level_nodes() {
            stmts.push(Self::node_stmt(node));
        }
        for cluster in graph.child_clusters(None) {
            stmts.push(self.cluster_stmt(cluster));
        }
        for edge in graph.edges() {
            stmts.push(Self::edge_stmt(edge));
        }

        Ok(Graph::DiGraph {
            id: Id::Escaped(quoted(self.diagram.title())),
            strict: false,
            stmts,
        })
    }

    /// Exports the diagram and prints it as DOT source text.
    ///
    /// # Errors
    ///
    /// Same failure conditions as [`DotExporter::export`].
    pub(crate) fn export_source(&self) -> Result<String, RenderError> {
        let graph = self.export()?;
        Ok(graphviz_rust::print(graph, &mut PrinterContext::default()))
    }

    /// Graph-wide attributes: title, rank direction, spacing, and fonts.
    fn graph_attributes(&self) -> Result<Vec<Attribute>, RenderError> {
        let layout = self.diagram.config().layout();
        let style = self.diagram.config().style();

        // `attr!` cannot take a macro call as its value argument: its
        // `$iv:ident $v:expr` rule swallows `format` as an identifier, so
        // bind the formatted values to locals first.
        let nodesep = format!("{:.2}", layout.nodesep());
        let ranksep = format!("{:.2}", layout.ranksep());

        let mut attrs = vec![
            esc_attr("label", self.diagram.title()),
            attr!("pad", "2.0"),
            attr!("splines", "ortho"),
            attr!("rankdir", layout.direction().rankdir()),
            attr!("nodesep", nodesep),
            attr!("ranksep", ranksep),
            esc_attr("fontname", style.fontname()),
            attr!("fontsize", 15),
            esc_attr("fontcolor", TITLE_FONT_COLOR),
        ];
        if let Some(background) = style.background_color().map_err(RenderError::Config)? {
            attrs.push(esc_attr("bgcolor", background.as_str()));
        }
        Ok(attrs)
    }

    /// Default attributes shared by every node statement.
    fn node_defaults(&self) -> Vec<Attribute> {
        vec![
            attr!("shape", "box"),
            esc_attr("style", "rounded,filled"),
            esc_attr("fontname", self.diagram.config().style().fontname()),
            attr!("fontsize", 13),
            attr!("fontcolor", "white"),
        ]
    }

    fn node_stmt(node: &graph::Node) -> Stmt {
        Stmt::Node(Node {
            id: node_id!(node.id()),
            attributes: vec![
                esc_attr("label", node.label()),
                esc_attr("fillcolor", node.category().fill_color()),
            ],
        })
    }

    /// A cluster becomes a `cluster_`-prefixed subgraph holding its styling
    /// attributes, its member nodes, and its nested clusters.
    fn cluster_stmt(&self, cluster: &graph::Cluster) -> Stmt {
        let graph = self.diagram.graph();
        let fill = CLUSTER_FILLS[cluster.depth() % CLUSTER_FILLS.len()];

        let mut stmts = vec![
            Stmt::Attribute(esc_attr("label", cluster.label())),
            Stmt::Attribute(attr!("labeljust", "l")),
            Stmt::Attribute(attr!("style", "rounded")),
            Stmt::Attribute(esc_attr("pencolor", CLUSTER_BORDER)),
            Stmt::Attribute(attr!("fontsize", 12)),
            Stmt::Attribute(esc_attr("bgcolor", fill)),
        ];
        for node in graph.cluster_nodes(cluster.id()) {
            stmts.push(Self::node_stmt(node));
        }
        for child in graph.child_clusters(Some(cluster.id())) {
            stmts.push(self.cluster_stmt(child));
        }

        Stmt::Subgraph(Subgraph {
            id: id!(cluster.id()),
            stmts,
        })
    }

    fn edge_stmt(edge: &graph::Edge) -> Stmt {
        Stmt::Edge(Edge {
            ty: EdgeTy::Pair(
                Vertex::N(node_id!(edge.source())),
                Vertex::N(node_id!(edge.target())),
            ),
            attributes: vec![],
        })
    }
}

/// Attribute whose value must be emitted as a quoted DOT string.
fn esc_attr(key: &str, value: &str) -> Attribute {
    Attribute(Id::Plain(key.to_string()), Id::Escaped(quoted(value)))
}

/// Wraps a string into a DOT quoted string literal, escaping as needed.
fn quoted(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

/// Escapes quotes and backslashes for a DOT quoted string. Literal newlines
/// become `\n` escapes, which Graphviz renders as line breaks.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
