//! IR node abstraction consumed by the cost model.
//!
//! # Core Components
//!
//! - **Types** (`types.rs`): Element kinds for array intrinsics
//! - **Operators** (`operators.rs`): Node kinds and their attributes
//! - **Node** (`node.rs`): IR node definition
//! - **Graph** (`graph.rs`): Flat node container

pub mod graph;
pub mod node;
pub mod operators;
pub mod types;

// Re-export commonly used types
pub use graph::Graph;
pub use node::{InputList, Node, NodeId};
pub use operators::{
    ArithOp, BitwiseOp, CallKind, CmpOp, ControlOp, GuardKind, MemoryOp, OpCategory, Operator,
    UnaryMathOp,
};
pub use types::ElementKind;
