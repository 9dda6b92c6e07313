//! In-memory storage for a declared diagram.
//!
//! This module provides the data structures behind [`crate::Diagram`]: nodes,
//! clusters, and edges held in declaration-ordered arenas. It is a
//! lightweight structure tuned for one job, preserving the order in which a
//! diagram was declared so that rendering the same declarations always
//! produces the same output.
//!
//! # Architecture
//!
//! The module provides:
//! - [`NodeId`], [`ClusterId`], [`EdgeId`]: Type-safe indices into the arenas
//! - [`Node`], [`Cluster`], [`Edge`]: The stored diagram entities
//! - [`DiagramGraph`]: The arena collection with ordered accessors
//!
//! Every id is issued by the graph that stores the entity; references between
//! entities (edge endpoints, cluster membership, cluster parents) are ids
//! into the same graph, so a fully declared graph cannot dangle.

use std::fmt;

use crate::category::Category;

// =============================================================================
// Identifiers
// =============================================================================

/// Type-safe index of a node within the diagram that issued it.
///
/// Displays as the stable name the node carries in generated DOT output
/// (`n0`, `n1`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Type-safe index of a cluster within the diagram that issued it.
///
/// Displays as the generated DOT subgraph name. The `cluster_` prefix is
/// significant: Graphviz only draws a bounding box for subgraphs whose name
/// starts with `cluster`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterId(pub(crate) usize);

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cluster_{}", self.0)
    }
}

/// Type-safe index of an edge within the diagram that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeId(pub(crate) usize);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

// =============================================================================
// Stored entities
// =============================================================================

/// A labeled diagram node.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    label: String,
    category: Category,
    cluster: Option<ClusterId>,
}

impl Node {
    /// The id this node was issued at declaration time.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The text drawn inside the node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The taxonomy category that styles this node.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The cluster this node belongs to, or `None` for top-level nodes.
    pub fn cluster(&self) -> Option<ClusterId> {
        self.cluster
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.label)
    }
}

/// A labeled grouping of nodes, drawn as a bounding box.
#[derive(Debug, Clone)]
pub struct Cluster {
    id: ClusterId,
    label: String,
    parent: Option<ClusterId>,
    depth: usize,
}

impl Cluster {
    /// The id this cluster was issued at declaration time.
    pub fn id(&self) -> ClusterId {
        self.id
    }

    /// The text drawn along the cluster border.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The enclosing cluster, or `None` for top-level clusters.
    pub fn parent(&self) -> Option<ClusterId> {
        self.parent
    }

    /// Nesting depth, starting at 0 for top-level clusters.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// A directed edge between two nodes.
///
/// Edges are unlabeled and unweighted; they only record which node points at
/// which.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
}

impl Edge {
    /// The id this edge was issued at declaration time.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The node the edge starts at.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The node the edge points at.
    pub fn target(&self) -> NodeId {
        self.target
    }
}

// =============================================================================
// Arena storage
// =============================================================================

/// Declaration-ordered storage for the entities of one diagram.
///
/// Ids are arena indices, so lookups are direct indexing and iteration yields
/// entities in the order they were declared. The graph is directed and allows
/// self-loops and multiple edges between the same pair of nodes.
#[derive(Debug, Default, Clone)]
pub struct DiagramGraph {
    nodes: Vec<Node>,
    clusters: Vec<Cluster>,
    edges: Vec<Edge>,
}

impl DiagramGraph {
    /// Creates a new empty graph.
    pub(crate) fn new() -> Self {
        DiagramGraph::default()
    }

    /// Adds a node with the given label and category, optionally inside a
    /// cluster.
    ///
    /// # Panics
    /// Panics in debug mode if the label is empty or the cluster id was not
    /// issued by this graph. These checks guard declaration-time programming
    /// errors; in a release build they are optimized away.
    pub(crate) fn add_node(
        &mut self,
        label: String,
        category: Category,
        cluster: Option<ClusterId>,
    ) -> NodeId {
        debug_assert!(!label.is_empty(), "Adding node: label must not be empty");
        #[cfg(debug_assertions)]
        if let Some(cluster_id) = cluster {
            assert!(
                cluster_id.0 < self.clusters.len(),
                "Adding node: Cluster {cluster_id} does not exist for label {label:?}",
            );
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            label,
            category,
            cluster,
        });
        id
    }

    /// Adds a cluster with the given label, optionally nested inside a parent
    /// cluster.
    ///
    /// # Panics
    /// Panics in debug mode if the label is empty or the parent id was not
    /// issued by this graph.
    pub(crate) fn add_cluster(&mut self, label: String, parent: Option<ClusterId>) -> ClusterId {
        debug_assert!(!label.is_empty(), "Adding cluster: label must not be empty");
        #[cfg(debug_assertions)]
        if let Some(parent_id) = parent {
            assert!(
                parent_id.0 < self.clusters.len(),
                "Adding cluster: Parent {parent_id} does not exist for label {label:?}",
            );
        }

        let id = ClusterId(self.clusters.len());
        let depth = match parent {
            Some(parent_id) => self.clusters[parent_id.0].depth + 1,
            None => 0,
        };
        self.clusters.push(Cluster {
            id,
            label,
            parent,
            depth,
        });
        id
    }

    /// Adds a directed edge between two previously declared nodes.
    ///
    /// Duplicate edges are kept; connecting the same pair twice draws two
    /// arrows.
    ///
    /// # Panics
    /// Panics in debug mode if either endpoint was not issued by this graph.
    pub(crate) fn add_edge(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        #[cfg(debug_assertions)]
        {
            assert!(
                source.0 < self.nodes.len(),
                "Adding edge: Source node {source} does not exist",
            );
            assert!(
                target.0 < self.nodes.len(),
                "Adding edge: Target node {target} does not exist",
            );
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge { id, source, target });
        id
    }

    /// Returns the node for the given id.
    ///
    /// # Panics
    /// Panics if the id was issued by a different graph with more entities.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Returns the cluster for the given id.
    ///
    /// # Panics
    /// Panics if the id was issued by a different graph with more entities.
    pub fn cluster(&self, id: ClusterId) -> &Cluster {
        &self.clusters[id.0]
    }

    /// Returns an iterator over all nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over all clusters in declaration order.
    pub fn clusters(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    /// Returns an iterator over all edges in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of clusters.
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Returns the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over the nodes declared directly inside the given
    /// cluster, in declaration order.
    pub fn cluster_nodes(&self, id: ClusterId) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |node| node.cluster == Some(id))
    }

    /// Returns an iterator over nodes that belong to no cluster.
    pub fn top_level_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.cluster.is_none())
    }

    /// Returns an iterator over the clusters directly nested under the given
    /// parent, where `None` selects top-level clusters.
    pub fn child_clusters(&self, parent: Option<ClusterId>) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter().filter(move |cluster| cluster.parent == parent)
    }
}
