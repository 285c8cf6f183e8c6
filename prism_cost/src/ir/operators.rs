//! IR operator definitions consumed by the cost model.
//!
//! Operators are organized by category:
//! - **Constants**: Fixed values and parameters
//! - **Arithmetic**: Typed and polymorphic math
//! - **Comparison**: Relational and equality tests
//! - **Memory**: Load, store, allocation
//! - **Control**: Branch, merge, loop, return
//! - **Guards**: Runtime type/bounds checks
//! - **Calls**: Function invocations
//! - **Intrinsics**: Math intrinsics and array equality
//!
//! The operator is the node's kind tag. Kind-specific attributes (which math
//! operation, which array element type) ride along in the variant payload.

use super::types::ElementKind;

// =============================================================================
// Operator Categories
// =============================================================================

/// Operator category for fast dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum OpCategory {
    /// Constant values.
    Constant = 0,
    /// Arithmetic operations.
    Arithmetic = 1,
    /// Comparison operations.
    Comparison = 2,
    /// Bitwise operations.
    Bitwise = 3,
    /// Memory operations.
    Memory = 4,
    /// Control flow.
    Control = 5,
    /// Guards (type checks, bounds checks).
    Guard = 6,
    /// Function calls.
    Call = 7,
    /// Projection (extracting tuple elements).
    Projection = 8,
    /// Phi nodes (SSA merge).
    Phi = 9,
    /// Container, attribute and boxing operations.
    Object = 10,
    /// Intrinsified operations (math, array comparison).
    Intrinsic = 11,
}

// =============================================================================
// Arithmetic Operators
// =============================================================================

/// Arithmetic operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArithOp {
    // Binary operations
    /// Addition: a + b
    Add = 0,
    /// Subtraction: a - b
    Sub = 1,
    /// Multiplication: a * b
    Mul = 2,
    /// True division: a / b
    TrueDiv = 3,
    /// Floor division: a // b
    FloorDiv = 4,
    /// Modulo: a % b
    Mod = 5,
    /// Power: a ** b
    Pow = 6,

    // Unary operations
    /// Negation: -a
    Neg = 16,
    /// Absolute value: abs(a)
    Abs = 18,
}

impl ArithOp {
    /// Check if this is a division-class operation (long-latency divider).
    #[inline]
    pub const fn is_division(self) -> bool {
        matches!(self, ArithOp::TrueDiv | ArithOp::FloorDiv | ArithOp::Mod)
    }
}

// =============================================================================
// Comparison Operators
// =============================================================================

/// Comparison operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CmpOp {
    /// Less than: a < b
    Lt = 0,
    /// Less than or equal: a <= b
    Le = 1,
    /// Equal: a == b
    Eq = 2,
    /// Not equal: a != b
    Ne = 3,
    /// Greater than: a > b
    Gt = 4,
    /// Greater than or equal: a >= b
    Ge = 5,
    /// Identity: a is b
    Is = 6,
    /// Not identity: a is not b
    IsNot = 7,
}

// =============================================================================
// Bitwise Operators
// =============================================================================

/// Bitwise operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BitwiseOp {
    /// Bitwise AND: a & b
    And = 0,
    /// Bitwise OR: a | b
    Or = 1,
    /// Bitwise XOR: a ^ b
    Xor = 2,
    /// Left shift: a << b
    Shl = 3,
    /// Right shift: a >> b
    Shr = 4,
    /// Bitwise NOT: ~a
    Not = 16,
}

// =============================================================================
// Guard Operators
// =============================================================================

/// Guard kind for runtime checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GuardKind {
    /// Type guard: ensure value has expected type.
    Type = 0,
    /// Bounds guard: ensure index is within range.
    Bounds = 1,
    /// Null guard: ensure value is not None.
    NotNull = 2,
    /// Overflow guard: operation didn't overflow.
    Overflow = 3,
    /// Zero divisor guard: divisor is not zero.
    NonZeroDivisor = 4,
}

// =============================================================================
// Call Operators
// =============================================================================

/// Call kind for different invocation patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CallKind {
    /// Direct function call: f(args)
    Direct = 0,
    /// Method call: obj.method(args)
    Method = 1,
    /// Call with keyword arguments.
    Keyword = 2,
    /// Tail call (reuses frame).
    Tail = 3,
    /// Runtime helper call (internal).
    Runtime = 4,
}

// =============================================================================
// Memory Operators
// =============================================================================

/// Memory operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MemoryOp {
    /// Load from object field.
    LoadField = 0,
    /// Store to object field.
    StoreField = 1,
    /// Load from array/list element.
    LoadElement = 2,
    /// Store to array/list element.
    StoreElement = 3,
    /// Allocate new object.
    Alloc = 4,
    /// Allocate array/list.
    AllocArray = 5,
}

impl MemoryOp {
    /// Check if this operation allocates.
    #[inline]
    pub const fn is_allocation(self) -> bool {
        matches!(self, MemoryOp::Alloc | MemoryOp::AllocArray)
    }
}

// =============================================================================
// Control Flow Operators
// =============================================================================

/// Control flow operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ControlOp {
    /// Start node (entry point).
    Start = 0,
    /// End node (exit point).
    End = 1,
    /// Region (control merge).
    Region = 2,
    /// Loop header.
    Loop = 3,
    /// If branch.
    If = 4,
    /// Return from function.
    Return = 5,
    /// Throw exception.
    Throw = 6,
    /// Deoptimize to interpreter.
    Deopt = 7,
}

// =============================================================================
// Math Intrinsics
// =============================================================================

/// Operation performed by a unary math intrinsic node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum UnaryMathOp {
    /// |x|
    Abs = 0,
    /// sqrt(x)
    Sqrt = 1,
    /// Natural logarithm.
    Log = 2,
    /// Base-10 logarithm.
    Log10 = 3,
    /// sin(x)
    Sin = 4,
    /// cos(x)
    Cos = 5,
    /// tan(x)
    Tan = 6,
    /// e^x
    Exp = 7,
}

impl UnaryMathOp {
    /// All math intrinsic operations.
    pub const ALL: [UnaryMathOp; 8] = [
        UnaryMathOp::Abs,
        UnaryMathOp::Sqrt,
        UnaryMathOp::Log,
        UnaryMathOp::Log10,
        UnaryMathOp::Sin,
        UnaryMathOp::Cos,
        UnaryMathOp::Tan,
        UnaryMathOp::Exp,
    ];

    /// Check if this is a logarithm.
    #[inline]
    pub const fn is_logarithm(self) -> bool {
        matches!(self, UnaryMathOp::Log | UnaryMathOp::Log10)
    }
}

// =============================================================================
// Operator (Unified)
// =============================================================================

/// Unified operator representation.
///
/// This enum covers all node kinds in the IR. Each variant carries the
/// kind-specific attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Constants
    /// Integer constant.
    ConstInt(i64),
    /// Float constant.
    ConstFloat(u64), // Stored as bits for Hash/Eq
    /// Boolean constant.
    ConstBool(bool),
    /// None constant.
    ConstNone,
    /// Parameter (function argument).
    Parameter(u16),

    // Arithmetic
    /// Typed integer arithmetic.
    IntOp(ArithOp),
    /// Typed float arithmetic.
    FloatOp(ArithOp),
    /// Generic (polymorphic) arithmetic.
    GenericOp(ArithOp),
    /// Unsigned multiply high (upper 64 bits of 128-bit product).
    MulHigh,
    /// Signed multiply high (upper 64 bits of 128-bit product).
    MulHighSigned,

    // Comparison
    /// Typed integer comparison.
    IntCmp(CmpOp),
    /// Typed float comparison.
    FloatCmp(CmpOp),
    /// Generic comparison.
    GenericCmp(CmpOp),

    // Bitwise
    /// Bitwise operation (integers only).
    Bitwise(BitwiseOp),
    /// Logical NOT: not x
    LogicalNot,

    /// Memory operation.
    Memory(MemoryOp),
    /// Control operation.
    Control(ControlOp),
    /// Runtime guard.
    Guard(GuardKind),
    /// Function/method call.
    Call(CallKind),

    // SSA
    /// Phi node for value merging.
    Phi,
    /// LoopPhi for loop-carried values.
    LoopPhi,
    /// Projection (extract from tuple result).
    Projection(u8),

    // Container operations
    /// Build list from elements.
    BuildList(u16),
    /// Build tuple from elements.
    BuildTuple(u16),
    /// Get iterator.
    GetIter,
    /// Get next from iterator.
    IterNext,
    /// Get item: obj[key]
    GetItem,
    /// Set item: obj[key] = value
    SetItem,
    /// Get attribute: obj.attr
    GetAttr,
    /// Set attribute: obj.attr = value
    SetAttr,
    /// Get length: len(obj)
    Len,

    // Type operations
    /// Type check: isinstance(obj, type)
    TypeCheck,
    /// Box primitive to object.
    Box,
    /// Unbox object to primitive.
    Unbox,

    // Intrinsics
    /// Unary math intrinsic (log, sin, sqrt, ...).
    MathIntrinsic(UnaryMathOp),
    /// Element-wise equality of two arrays of the given element kind.
    ArrayEquals(ElementKind),
}

impl Operator {
    /// Get the category of this operator.
    pub const fn category(&self) -> OpCategory {
        match self {
            Operator::ConstInt(_)
            | Operator::ConstFloat(_)
            | Operator::ConstBool(_)
            | Operator::ConstNone
            | Operator::Parameter(_) => OpCategory::Constant,

            Operator::IntOp(_)
            | Operator::FloatOp(_)
            | Operator::GenericOp(_)
            | Operator::MulHigh
            | Operator::MulHighSigned => OpCategory::Arithmetic,

            Operator::IntCmp(_) | Operator::FloatCmp(_) | Operator::GenericCmp(_) => {
                OpCategory::Comparison
            }

            Operator::Bitwise(_) | Operator::LogicalNot => OpCategory::Bitwise,

            Operator::Memory(_) => OpCategory::Memory,

            Operator::Control(_) => OpCategory::Control,

            Operator::Guard(_) => OpCategory::Guard,

            Operator::Call(_) => OpCategory::Call,

            Operator::Projection(_) => OpCategory::Projection,

            Operator::Phi | Operator::LoopPhi => OpCategory::Phi,

            Operator::BuildList(_)
            | Operator::BuildTuple(_)
            | Operator::GetIter
            | Operator::IterNext
            | Operator::GetItem
            | Operator::SetItem
            | Operator::GetAttr
            | Operator::SetAttr
            | Operator::Len
            | Operator::TypeCheck
            | Operator::Box
            | Operator::Unbox => OpCategory::Object,

            Operator::MathIntrinsic(_) | Operator::ArrayEquals(_) => OpCategory::Intrinsic,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_intrinsics() {
        assert_eq!(
            Operator::MathIntrinsic(UnaryMathOp::Log).category(),
            OpCategory::Intrinsic
        );
        assert_eq!(
            Operator::ArrayEquals(ElementKind::Byte).category(),
            OpCategory::Intrinsic
        );
    }

    #[test]
    fn test_category_control_and_object() {
        assert_eq!(
            Operator::Control(ControlOp::Return).category(),
            OpCategory::Control
        );
        assert_eq!(Operator::GetAttr.category(), OpCategory::Object);
        assert_eq!(Operator::LogicalNot.category(), OpCategory::Bitwise);
    }

    #[test]
    fn test_math_op_classes() {
        let logs: Vec<_> = UnaryMathOp::ALL
            .iter()
            .filter(|op| op.is_logarithm())
            .collect();
        assert_eq!(logs, [&UnaryMathOp::Log, &UnaryMathOp::Log10]);
    }

    #[test]
    fn test_cost_classes() {
        assert!(ArithOp::Mod.is_division());
        assert!(ArithOp::TrueDiv.is_division());
        assert!(!ArithOp::Mul.is_division());
        assert!(MemoryOp::AllocArray.is_allocation());
        assert!(!MemoryOp::LoadElement.is_allocation());
    }
}
