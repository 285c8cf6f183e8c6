//! Shared operator catalogs for integration tests.

#![allow(dead_code)]

use prism_cost::ir::{
    ArithOp, BitwiseOp, CallKind, CmpOp, ControlOp, ElementKind, GuardKind, MemoryOp, Operator,
    UnaryMathOp,
};
use prism_cost::target::{CpuFeature, CpuFeatureSet, TargetDescription};
use proptest::prelude::*;

const ARITH: [ArithOp; 9] = [
    ArithOp::Add,
    ArithOp::Sub,
    ArithOp::Mul,
    ArithOp::TrueDiv,
    ArithOp::FloorDiv,
    ArithOp::Mod,
    ArithOp::Pow,
    ArithOp::Neg,
    ArithOp::Abs,
];

const CMP: [CmpOp; 8] = [
    CmpOp::Lt,
    CmpOp::Le,
    CmpOp::Eq,
    CmpOp::Ne,
    CmpOp::Gt,
    CmpOp::Ge,
    CmpOp::Is,
    CmpOp::IsNot,
];

const BITWISE: [BitwiseOp; 6] = [
    BitwiseOp::And,
    BitwiseOp::Or,
    BitwiseOp::Xor,
    BitwiseOp::Shl,
    BitwiseOp::Shr,
    BitwiseOp::Not,
];

const MEMORY: [MemoryOp; 6] = [
    MemoryOp::LoadField,
    MemoryOp::StoreField,
    MemoryOp::LoadElement,
    MemoryOp::StoreElement,
    MemoryOp::Alloc,
    MemoryOp::AllocArray,
];

const CONTROL: [ControlOp; 8] = [
    ControlOp::Start,
    ControlOp::End,
    ControlOp::Region,
    ControlOp::Loop,
    ControlOp::If,
    ControlOp::Return,
    ControlOp::Throw,
    ControlOp::Deopt,
];

const GUARDS: [GuardKind; 5] = [
    GuardKind::Type,
    GuardKind::Bounds,
    GuardKind::NotNull,
    GuardKind::Overflow,
    GuardKind::NonZeroDivisor,
];

const CALLS: [CallKind; 5] = [
    CallKind::Direct,
    CallKind::Method,
    CallKind::Keyword,
    CallKind::Tail,
    CallKind::Runtime,
];

/// One operator per kind/attribute combination.
pub fn all_operators() -> Vec<Operator> {
    let mut ops = vec![
        Operator::ConstInt(42),
        Operator::ConstFloat(1.5f64.to_bits()),
        Operator::ConstBool(true),
        Operator::ConstNone,
        Operator::Parameter(0),
        Operator::MulHigh,
        Operator::MulHighSigned,
        Operator::LogicalNot,
        Operator::Phi,
        Operator::LoopPhi,
        Operator::Projection(1),
        Operator::BuildList(3),
        Operator::BuildTuple(2),
        Operator::GetIter,
        Operator::IterNext,
        Operator::GetItem,
        Operator::SetItem,
        Operator::GetAttr,
        Operator::SetAttr,
        Operator::Len,
        Operator::TypeCheck,
        Operator::Box,
        Operator::Unbox,
    ];
    for op in ARITH {
        ops.extend([
            Operator::IntOp(op),
            Operator::FloatOp(op),
            Operator::GenericOp(op),
        ]);
    }
    for op in CMP {
        ops.extend([
            Operator::IntCmp(op),
            Operator::FloatCmp(op),
            Operator::GenericCmp(op),
        ]);
    }
    ops.extend(BITWISE.map(Operator::Bitwise));
    ops.extend(MEMORY.map(Operator::Memory));
    ops.extend(CONTROL.map(Operator::Control));
    ops.extend(GUARDS.map(Operator::Guard));
    ops.extend(CALLS.map(Operator::Call));
    ops.extend(UnaryMathOp::ALL.map(Operator::MathIntrinsic));
    ops.extend(ElementKind::ALL.map(Operator::ArrayEquals));
    ops
}

/// Whether the AMD64 model has its own answer for `op` (for some feature set).
pub fn amd64_special_cased(op: &Operator) -> bool {
    matches!(
        op,
        Operator::MathIntrinsic(UnaryMathOp::Log | UnaryMathOp::Log10)
            | Operator::Control(ControlOp::Return)
            | Operator::ArrayEquals(_)
    )
}

/// Operators including arbitrary constant payloads.
pub fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        any::<i64>().prop_map(Operator::ConstInt),
        any::<u64>().prop_map(Operator::ConstFloat),
        any::<u16>().prop_map(Operator::Parameter),
        any::<u8>().prop_map(Operator::Projection),
        any::<u16>().prop_map(Operator::BuildList),
        prop::sample::select(all_operators()),
    ]
}

/// Arbitrary x86-64 targets.
pub fn x86_target_strategy() -> impl Strategy<Value = TargetDescription> {
    let x86: Vec<CpuFeature> = CpuFeature::ALL
        .into_iter()
        .filter(|f| f.architecture() == prism_cost::target::Architecture::X86_64)
        .collect();
    prop::sample::subsequence(x86.clone(), 0..=x86.len()).prop_map(|features| {
        TargetDescription::x86_64(features).expect("x86 features on x86 target")
    })
}

/// Feature set with exactly the given features.
pub fn features(list: &[CpuFeature]) -> CpuFeatureSet {
    list.iter().copied().collect()
}
