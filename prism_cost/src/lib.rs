//! Node cost estimation for the Prism JIT.
//!
//! Optimization passes (inlining, unrolling, scheduling) ask a
//! [`NodeCostProvider`](cost::NodeCostProvider) two questions about each IR
//! node: how many cycles it is expected to take and how much code it is
//! expected to emit. Answers are coarse tiers, refined per architecture from
//! the CPU features captured in a [`TargetDescription`](target::TargetDescription).
//!
//! - `ir`: the node kinds the model reads
//! - `target`: architecture and CPU feature descriptors
//! - `cost`: tiers, the generic model, the AMD64 model and provider selection
#![deny(unsafe_op_in_unsafe_fn)]
pub mod cost;
pub mod ir;
pub mod target;

pub use cost::{for_target, NodeCostProvider, NodeCycles, NodeSize};
pub use target::TargetDescription;
