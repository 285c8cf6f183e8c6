//! Node cost estimation.
//!
//! Two-stage lookup: a target-specialized model answers the node kinds it
//! knows better and forwards everything else to [`GenericCostModel`], which
//! maps every kind to some tier.
//!
//! # Usage
//!
//! ```
//! use prism_cost::cost::{for_target, NodeCostProvider, NodeCycles};
//! use prism_cost::ir::{ElementKind, Graph};
//! use prism_cost::target::TargetDescription;
//!
//! let target: TargetDescription = "x86_64+sse4.1".parse().unwrap();
//! let provider = for_target(&target);
//!
//! let mut graph = Graph::new();
//! let a = graph.parameter(0);
//! let b = graph.parameter(1);
//! let len = graph.const_int(64);
//! let eq = graph.array_equals(ElementKind::Byte, a, b, len);
//! assert_eq!(provider.cycles(graph.node(eq)), NodeCycles::Cycles80);
//! ```

pub mod amd64;
pub mod generic;
pub mod provider;
pub mod tier;

pub use amd64::Amd64CostModel;
pub use generic::{GenericCostModel, DEFAULT_CYCLES, DEFAULT_SIZE};
pub use provider::{for_target, CategoryCost, CostSummary, NodeCostProvider};
pub use tier::{NodeCycles, NodeSize};
