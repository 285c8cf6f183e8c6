//! Flat node container used for whole-graph estimates.
//!
//! Nodes are stored in insertion order and addressed by index. The graph is
//! created with start and end nodes, like the full optimizer graph, so that
//! aggregate estimates see the same control skeleton.

use super::node::{Node, NodeId};
use super::operators::{ArithOp, ControlOp, Operator, UnaryMathOp};
use super::types::ElementKind;

// =============================================================================
// Graph Structure
// =============================================================================

/// An IR graph.
#[derive(Clone)]
pub struct Graph {
    /// Node storage, indexed by `NodeId`.
    nodes: Vec<Node>,

    /// The start node (control entry).
    pub start: NodeId,

    /// The end node (control exit).
    pub end: NodeId,
}

impl Graph {
    /// Create a new graph with start and end nodes.
    pub fn new() -> Self {
        let mut graph = Graph {
            nodes: Vec::with_capacity(64),
            start: NodeId::new(0),
            end: NodeId::new(0),
        };
        let start = graph.add_node(Operator::Control(ControlOp::Start), &[]);
        let end = graph.add_node(Operator::Control(ControlOp::End), &[start]);
        graph.start = start;
        graph.end = end;
        graph
    }

    // =========================================================================
    // Node Access
    // =========================================================================

    /// Get a reference to a node.
    ///
    /// Panics if `id` does not belong to this graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.as_usize()]
    }

    /// Get a node by ID (optional).
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.as_usize())
    }

    /// Number of nodes, including start and end.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph holds nothing but its start and end nodes.
    #[inline]
    pub fn has_only_skeleton(&self) -> bool {
        self.nodes.len() <= 2
    }

    // =========================================================================
    // Node Creation
    // =========================================================================

    /// Add a new node to the graph.
    pub fn add_node(&mut self, op: Operator, inputs: &[NodeId]) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(Node::new(op, inputs));
        id
    }

    /// Add a parameter node.
    pub fn parameter(&mut self, index: u16) -> NodeId {
        self.add_node(Operator::Parameter(index), &[])
    }

    /// Add an integer constant.
    pub fn const_int(&mut self, value: i64) -> NodeId {
        self.add_node(Operator::ConstInt(value), &[])
    }

    /// Add an integer addition.
    pub fn int_add(&mut self, lhs: NodeId, rhs: NodeId) -> NodeId {
        self.add_node(Operator::IntOp(ArithOp::Add), &[lhs, rhs])
    }

    /// Add a unary math intrinsic.
    pub fn math(&mut self, op: UnaryMathOp, value: NodeId) -> NodeId {
        self.add_node(Operator::MathIntrinsic(op), &[value])
    }

    /// Add an array equality intrinsic.
    pub fn array_equals(
        &mut self,
        kind: ElementKind,
        lhs: NodeId,
        rhs: NodeId,
        length: NodeId,
    ) -> NodeId {
        self.add_node(Operator::ArrayEquals(kind), &[lhs, rhs, length])
    }

    /// Add a return node.
    pub fn return_value(&mut self, control: NodeId, value: NodeId) -> NodeId {
        self.add_node(Operator::Control(ControlOp::Return), &[control, value])
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Iterate over all nodes with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Graph ({} nodes):", self.nodes.len())?;
        for (id, node) in self.iter() {
            writeln!(f, "  {:?}: {:?}", id, node)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}

// =============================================================================
// Tests
// =============================================================================
