//! Target-independent node costs.
//!
//! This is the terminal fallback of every provider chain: it maps every
//! operator to a tier. Kinds without a declared estimate get
//! [`DEFAULT_CYCLES`] / [`DEFAULT_SIZE`] through the catch-all arm.

use super::provider::NodeCostProvider;
use super::tier::{NodeCycles, NodeSize};
use crate::ir::{ArithOp, CallKind, ControlOp, Node, Operator};

/// Cycles for kinds without a declared estimate.
pub const DEFAULT_CYCLES: NodeCycles = NodeCycles::Cycles2;

/// Size for kinds without a declared estimate.
pub const DEFAULT_SIZE: NodeSize = NodeSize::Size2;

/// Cost model with no knowledge of the target machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericCostModel;

impl GenericCostModel {
    /// Create the generic model.
    pub const fn new() -> Self {
        GenericCostModel
    }

    /// Declared execution cost of `op`.
    pub const fn cycles_of(op: &Operator) -> NodeCycles {
        use NodeCycles::*;
        match *op {
            // Folded into users or materialized for free
            Operator::ConstInt(_)
            | Operator::ConstFloat(_)
            | Operator::ConstBool(_)
            | Operator::ConstNone
            | Operator::Parameter(_)
            | Operator::Phi
            | Operator::LoopPhi
            | Operator::Projection(_) => Cycles0,
            Operator::Control(
                ControlOp::Start | ControlOp::End | ControlOp::Region | ControlOp::Loop,
            ) => Cycles0,
            Operator::Control(ControlOp::Throw | ControlOp::Deopt) => Cycles10,

            Operator::IntOp(op) if op.is_division() => Cycles20,
            Operator::IntOp(ArithOp::Pow) | Operator::FloatOp(ArithOp::Pow) => Cycles30,
            Operator::IntOp(ArithOp::Mul) | Operator::MulHigh | Operator::MulHighSigned => Cycles2,
            Operator::IntOp(_)
            | Operator::IntCmp(_)
            | Operator::Bitwise(_)
            | Operator::LogicalNot
            | Operator::Guard(_) => Cycles1,
            Operator::FloatOp(op) if op.is_division() => Cycles10,

            // Polymorphic ops dispatch through the runtime
            Operator::GenericOp(_) | Operator::GenericCmp(_) => Cycles30,

            Operator::Memory(op) if op.is_allocation() => Cycles20,

            Operator::Call(CallKind::Tail) => Cycles20,
            Operator::Call(_) => Cycles30,

            Operator::Len => Cycles4,
            Operator::BuildList(_)
            | Operator::BuildTuple(_)
            | Operator::GetIter
            | Operator::IterNext
            | Operator::GetItem
            | Operator::SetItem
            | Operator::GetAttr
            | Operator::SetAttr
            | Operator::TypeCheck
            | Operator::Box
            | Operator::Unbox => Cycles15,

            Operator::MathIntrinsic(_) => Cycles8,
            // Scalar loop over both arrays
            Operator::ArrayEquals(_) => Cycles100,

            _ => DEFAULT_CYCLES,
        }
    }

    /// Declared code size of `op`.
    pub const fn size_of(op: &Operator) -> NodeSize {
        use NodeSize::*;
        match *op {
            Operator::ConstInt(_)
            | Operator::ConstFloat(_)
            | Operator::ConstBool(_)
            | Operator::ConstNone
            | Operator::Parameter(_)
            | Operator::Phi
            | Operator::LoopPhi
            | Operator::Projection(_) => Size0,
            Operator::Control(
                ControlOp::Start | ControlOp::End | ControlOp::Region | ControlOp::Loop,
            ) => Size0,
            Operator::Control(ControlOp::Throw | ControlOp::Deopt) => Size8,

            Operator::IntOp(op) if op.is_division() => Size4,
            Operator::IntOp(ArithOp::Pow) | Operator::FloatOp(ArithOp::Pow) => Size8,
            Operator::IntOp(_)
            | Operator::IntCmp(_)
            | Operator::Bitwise(_)
            | Operator::LogicalNot
            | Operator::MulHigh
            | Operator::MulHighSigned => Size1,

            Operator::GenericOp(_) | Operator::GenericCmp(_) => Size10,

            Operator::Memory(op) if op.is_allocation() => Size10,

            Operator::Call(CallKind::Tail) => Size8,
            Operator::Call(_) => Size10,

            Operator::Len => Size3,
            Operator::BuildList(_)
            | Operator::BuildTuple(_)
            | Operator::GetIter
            | Operator::IterNext
            | Operator::GetItem
            | Operator::SetItem
            | Operator::GetAttr
            | Operator::SetAttr
            | Operator::TypeCheck
            | Operator::Box
            | Operator::Unbox => Size8,

            Operator::MathIntrinsic(_) => Size2,
            Operator::ArrayEquals(_) => Size20,

            _ => DEFAULT_SIZE,
        }
    }
}

impl NodeCostProvider for GenericCostModel {
    fn name(&self) -> &'static str {
        "generic"
    }

    #[inline]
    fn cycles(&self, node: &Node) -> NodeCycles {
        Self::cycles_of(&node.op)
    }

    #[inline]
    fn size(&self, node: &Node) -> NodeSize {
        Self::size_of(&node.op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{BitwiseOp, CmpOp, ElementKind, GuardKind, MemoryOp, UnaryMathOp};

    fn cost(op: Operator) -> (NodeCycles, NodeSize) {
        let node = Node::leaf(op);
        let model = GenericCostModel::new();
        (model.cycles(&node), model.size(&node))
    }

    #[test]
    fn test_constants_are_free() {
        assert_eq!(
            cost(Operator::ConstInt(7)),
            (NodeCycles::Cycles0, NodeSize::Size0)
        );
        assert_eq!(
            cost(Operator::Parameter(0)),
            (NodeCycles::Cycles0, NodeSize::Size0)
        );
        assert_eq!(
            cost(Operator::Control(ControlOp::Region)),
            (NodeCycles::Cycles0, NodeSize::Size0)
        );
    }

    #[test]
    fn test_int_alu() {
        assert_eq!(
            cost(Operator::IntOp(ArithOp::Add)),
            (NodeCycles::Cycles1, NodeSize::Size1)
        );
        assert_eq!(
            cost(Operator::Bitwise(BitwiseOp::Xor)),
            (NodeCycles::Cycles1, NodeSize::Size1)
        );
        assert_eq!(
            cost(Operator::IntOp(ArithOp::Mul)),
            (NodeCycles::Cycles2, NodeSize::Size1)
        );
        assert_eq!(
            cost(Operator::IntOp(ArithOp::FloorDiv)),
            (NodeCycles::Cycles20, NodeSize::Size4)
        );
    }

    #[test]
    fn test_float_ops() {
        assert_eq!(
            cost(Operator::FloatOp(ArithOp::TrueDiv)),
            (NodeCycles::Cycles10, NodeSize::Size2)
        );
        assert_eq!(
            cost(Operator::FloatOp(ArithOp::Pow)),
            (NodeCycles::Cycles30, NodeSize::Size8)
        );
        assert_eq!(
            cost(Operator::FloatCmp(CmpOp::Lt)),
            (DEFAULT_CYCLES, DEFAULT_SIZE)
        );
    }

    #[test]
    fn test_runtime_dispatch_is_expensive() {
        let (generic_cycles, _) = cost(Operator::GenericOp(ArithOp::Add));
        let (typed_cycles, _) = cost(Operator::IntOp(ArithOp::Add));
        assert!(generic_cycles > typed_cycles);
    }

    #[test]
    fn test_memory() {
        assert_eq!(
            cost(Operator::Memory(MemoryOp::LoadField)),
            (DEFAULT_CYCLES, DEFAULT_SIZE)
        );
        assert_eq!(
            cost(Operator::Memory(MemoryOp::Alloc)),
            (NodeCycles::Cycles20, NodeSize::Size10)
        );
    }

    #[test]
    fn test_control_defaults() {
        assert_eq!(
            cost(Operator::Control(ControlOp::Return)),
            (DEFAULT_CYCLES, DEFAULT_SIZE)
        );
        assert_eq!(
            cost(Operator::Control(ControlOp::Deopt)),
            (NodeCycles::Cycles10, NodeSize::Size8)
        );
        assert_eq!(
            cost(Operator::Guard(GuardKind::Bounds)),
            (NodeCycles::Cycles1, DEFAULT_SIZE)
        );
    }

    #[test]
    fn test_calls() {
        assert_eq!(
            cost(Operator::Call(CallKind::Direct)),
            (NodeCycles::Cycles30, NodeSize::Size10)
        );
        assert_eq!(
            cost(Operator::Call(CallKind::Tail)),
            (NodeCycles::Cycles20, NodeSize::Size8)
        );
    }

    #[test]
    fn test_intrinsics() {
        for op in UnaryMathOp::ALL {
            assert_eq!(
                cost(Operator::MathIntrinsic(op)),
                (NodeCycles::Cycles8, NodeSize::Size2)
            );
        }
        for kind in ElementKind::ALL {
            assert_eq!(
                cost(Operator::ArrayEquals(kind)),
                (NodeCycles::Cycles100, NodeSize::Size20)
            );
        }
    }

    #[test]
    fn test_object_ops() {
        assert_eq!(cost(Operator::Len), (NodeCycles::Cycles4, NodeSize::Size3));
        assert_eq!(
            cost(Operator::GetAttr),
            (NodeCycles::Cycles15, NodeSize::Size8)
        );
    }
}
