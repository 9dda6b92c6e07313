//! Scoped cluster declaration.
//!
//! A [`ClusterScope`] is handed out by [`Diagram::cluster`] and exclusively
//! borrows the diagram for as long as it lives. While the scope is alive,
//! nodes declared through it are tagged as members of that cluster; dropping
//! the scope closes the cluster and releases the diagram. The borrow checker
//! enforces what a dynamically scoped context would only check at run time:
//! a closed cluster cannot be reopened, and declarations cannot bypass an
//! open scope.

use log::debug;

use crate::{
    Diagram,
    category::Category,
    graph::{ClusterId, EdgeId, NodeId},
};

/// An open cluster under construction.
///
/// Created by [`Diagram::cluster`] or nested via [`ClusterScope::cluster`].
/// The scope mutably borrows the diagram, so the diagram itself is
/// inaccessible until the scope is dropped.
///
/// # Examples
/// ```rust
/// use armature::{Category, Diagram};
///
/// let mut diagram = Diagram::new("Pipeline");
/// let worker = {
///     let mut stage = diagram.cluster("Ingest");
///     stage.node("Worker", Category::Compute)
/// };
/// // The scope is closed; the diagram is usable again.
/// let sink = diagram.node("Sink", Category::Database);
/// diagram.connect(worker, sink);
/// ```
pub struct ClusterScope<'d> {
    diagram: &'d mut Diagram,
    id: ClusterId,
}

impl<'d> ClusterScope<'d> {
    pub(crate) fn new(diagram: &'d mut Diagram, id: ClusterId) -> Self {
        ClusterScope { diagram, id }
    }

    /// The id of the cluster this scope is building.
    pub fn id(&self) -> ClusterId {
        self.id
    }

    /// The label of the cluster this scope is building.
    pub fn label(&self) -> &str {
        self.diagram.graph().cluster(self.id).label()
    }

    /// Declares a node inside this cluster.
    ///
    /// The returned id stays valid after the scope closes, so nodes declared
    /// here can be connected from anywhere in the diagram.
    pub fn node(&mut self, label: impl Into<String>, category: Category) -> NodeId {
        let label = label.into();
        debug!(label = label.as_str(), category:? = category, cluster:? = self.id; "Declaring node");
        self.diagram.graph_mut().add_node(label, category, Some(self.id))
    }

    /// Opens a cluster nested inside this one.
    ///
    /// The returned scope borrows this one, so declarations go to the inner
    /// cluster until it is dropped.
    pub fn cluster(&mut self, label: impl Into<String>) -> ClusterScope<'_> {
        let label = label.into();
        debug!(label = label.as_str(), parent:? = self.id; "Opening nested cluster scope");
        let id = self.diagram.graph_mut().add_cluster(label, Some(self.id));
        ClusterScope::new(self.diagram, id)
    }

    /// Declares a directed edge while the scope is open.
    ///
    /// Edges are diagram-global; this is a convenience for wiring up nodes
    /// without closing the scope first.
    pub fn connect(&mut self, source: NodeId, target: NodeId) -> EdgeId {
        self.diagram.graph_mut().add_edge(source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Diagram;

    #[test]
    fn test_nodes_declared_in_scope_belong_to_cluster() {
        let mut diagram = Diagram::new("Test");

        let (cluster_id, a, b) = {
            let mut scope = diagram.cluster("Group");
            let a = scope.node("A", Category::Compute);
            let b = scope.node("B", Category::Compute);
            (scope.id(), a, b)
        };

        assert_eq!(diagram.graph().node(a).cluster(), Some(cluster_id));
        assert_eq!(diagram.graph().node(b).cluster(), Some(cluster_id));
        assert_eq!(diagram.graph().cluster_nodes(cluster_id).count(), 2);
    }

    #[test]
    fn test_scope_label() {
        let mut diagram = Diagram::new("Test");
        let scope = diagram.cluster("Lambda Functions");

        assert_eq!(scope.label(), "Lambda Functions");
    }

    #[test]
    fn test_nodes_after_scope_are_top_level() {
        let mut diagram = Diagram::new("Test");

        {
            let mut scope = diagram.cluster("Group");
            scope.node("Inside", Category::Compute);
        }
        let outside = diagram.node("Outside", Category::Database);

        assert_eq!(diagram.graph().node(outside).cluster(), None);
        assert_eq!(diagram.graph().top_level_nodes().count(), 1);
    }

    #[test]
    fn test_nested_scopes() {
        let mut diagram = Diagram::new("Test");

        let (outer_id, inner_id, deep) = {
            let mut outer = diagram.cluster("Outer");
            let mut inner = outer.cluster("Inner");
            let deep = inner.node("Deep", Category::Compute);
            let inner_id = inner.id();
            drop(inner);
            (outer.id(), inner_id, deep)
        };

        assert_eq!(diagram.graph().cluster(inner_id).parent(), Some(outer_id));
        assert_eq!(diagram.graph().node(deep).cluster(), Some(inner_id));
    }

    #[test]
    fn test_connect_inside_scope() {
        let mut diagram = Diagram::new("Test");
        let entry = diagram.node("Entry", Category::ApiGateway);

        {
            let mut scope = diagram.cluster("Handlers");
            let handler = scope.node("Handler", Category::Compute);
            scope.connect(entry, handler);
        }

        assert_eq!(diagram.graph().edge_count(), 1);
    }

    #[test]
    fn test_empty_scope_keeps_cluster() {
        let mut diagram = Diagram::new("Test");

        let cluster_id = diagram.cluster("Reserved").id();

        assert_eq!(diagram.graph().cluster_count(), 1);
        assert_eq!(diagram.graph().cluster(cluster_id).label(), "Reserved");
        assert_eq!(diagram.graph().cluster_nodes(cluster_id).count(), 0);
    }
}
