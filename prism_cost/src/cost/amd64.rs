//! AMD64 node costs.
//!
//! Refines the generic model for the few node kinds where the x86-64 backend
//! knows better:
//!
//! - **Logarithms**: `log`/`log10` expand to a polynomial stub, not a single
//!   instruction
//! - **Return**: epilogue plus safepoint poll
//! - **Array equality**: vectorized when AVX2 (32-byte) or SSE4.1 (16-byte)
//!   compares are available
//!
//! Every other query is forwarded to the generic model unchanged.

use super::generic::GenericCostModel;
use super::provider::NodeCostProvider;
use super::tier::{NodeCycles, NodeSize};
use crate::ir::{ControlOp, Node, Operator};
use crate::target::{CpuFeature, TargetDescription};

/// Cost model for x86-64 targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amd64CostModel {
    generic: GenericCostModel,
    avx2: bool,
    sse41: bool,
}

impl Amd64CostModel {
    /// Capture the capability flags the model depends on from `target`.
    pub fn new(target: &TargetDescription) -> Self {
        let avx2 = target.contains(CpuFeature::Avx2);
        let sse41 = target.contains(CpuFeature::Sse41);
        tracing::debug!(descriptor = %target, avx2, sse41, "amd64 cost model created");
        Self {
            generic: GenericCostModel::new(),
            avx2,
            sse41,
        }
    }

    /// Whether 32-byte vector compares are available.
    #[inline]
    pub fn has_avx2(&self) -> bool {
        self.avx2
    }

    /// Whether 16-byte vector compares are available.
    #[inline]
    pub fn has_sse41(&self) -> bool {
        self.sse41
    }
}

impl NodeCostProvider for Amd64CostModel {
    fn name(&self) -> &'static str {
        "amd64"
    }

    fn cycles(&self, node: &Node) -> NodeCycles {
        match node.op {
            Operator::MathIntrinsic(op) if op.is_logarithm() => return NodeCycles::Cycles15,
            Operator::Control(ControlOp::Return) => return NodeCycles::Cycles6,
            Operator::ArrayEquals(_) => {
                if self.avx2 {
                    return NodeCycles::Cycles50;
                } else if self.sse41 {
                    return NodeCycles::Cycles80;
                }
            }
            _ => {}
        }
        self.generic.cycles(node)
    }

    // Array equality size is the same with or without vector compares.
    fn size(&self, node: &Node) -> NodeSize {
        match node.op {
            Operator::MathIntrinsic(op) if op.is_logarithm() => NodeSize::Size30,
            Operator::Control(ControlOp::Return) => NodeSize::Size4,
            _ => self.generic.size(node),
        }
    }
}
