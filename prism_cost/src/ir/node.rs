//! IR node definitions.
//!
//! Each node has:
//! - **Operator**: What the node computes (its kind tag plus attributes)
//! - **Inputs**: Data and control dependencies (use-def edges)
//!
//! The cost model only reads the operator; inputs are carried so that graphs
//! built for estimation keep their shape.

use super::operators::{ControlOp, Operator, UnaryMathOp};
use super::types::ElementKind;
use smallvec::SmallVec;
use std::fmt;

// =============================================================================
// Node ID
// =============================================================================

/// Unique identifier for a node in a [`Graph`](super::Graph).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Create a new ID from a raw index.
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Get the index as usize (for indexing).
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Compact input list; most nodes have 0-4 inputs.
pub type InputList = SmallVec<[NodeId; 4]>;

// =============================================================================
// Node
// =============================================================================

/// A node in the IR graph.
#[derive(Clone, PartialEq, Eq)]
pub struct Node {
    /// The operation this node performs.
    pub op: Operator,

    /// Input nodes (dependencies).
    pub inputs: InputList,
}

impl Node {
    /// Create a new node with the given operator and inputs.
    pub fn new(op: Operator, inputs: &[NodeId]) -> Self {
        Node {
            op,
            inputs: SmallVec::from_slice(inputs),
        }
    }

    /// Create a node without inputs.
    pub fn leaf(op: Operator) -> Self {
        Node::new(op, &[])
    }

    /// Create a constant integer node.
    pub fn const_int(value: i64) -> Self {
        Node::leaf(Operator::ConstInt(value))
    }

    /// Create a parameter node.
    pub fn parameter(index: u16) -> Self {
        Node::leaf(Operator::Parameter(index))
    }

    /// Create a return node.
    pub fn return_value(control: NodeId, value: NodeId) -> Self {
        Node::new(Operator::Control(ControlOp::Return), &[control, value])
    }

    /// Create a unary math intrinsic node.
    pub fn math(op: UnaryMathOp, value: NodeId) -> Self {
        Node::new(Operator::MathIntrinsic(op), &[value])
    }

    /// Create an array equality node comparing `length` elements.
    pub fn array_equals(kind: ElementKind, lhs: NodeId, rhs: NodeId, length: NodeId) -> Self {
        Node::new(Operator::ArrayEquals(kind), &[lhs, rhs, length])
    }

    /// Get the operator.
    #[inline]
    pub fn op(&self) -> &Operator {
        &self.op
    }

    /// Get input at index.
    #[inline]
    pub fn input(&self, index: usize) -> Option<NodeId> {
        self.inputs.get(index).copied()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.op)?;
        if !self.inputs.is_empty() {
            write!(f, " {:?}", self.inputs.as_slice())?;
        }
        Ok(())
    }
}
