//! Element kinds carried by array intrinsics.

use std::fmt;

/// Element type of an array operated on by an intrinsic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementKind {
    Bool = 0,
    Byte = 1,
    Char = 2,
    Short = 3,
    Int = 4,
    Long = 5,
    Float = 6,
    Double = 7,
    /// Object references (compressed or not, compared by identity).
    Object = 8,
}

impl ElementKind {
    /// All element kinds.
    pub const ALL: [ElementKind; 9] = [
        ElementKind::Bool,
        ElementKind::Byte,
        ElementKind::Char,
        ElementKind::Short,
        ElementKind::Int,
        ElementKind::Long,
        ElementKind::Float,
        ElementKind::Double,
        ElementKind::Object,
    ];
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Bool => "bool",
            ElementKind::Byte => "byte",
            ElementKind::Char => "char",
            ElementKind::Short => "short",
            ElementKind::Int => "int",
            ElementKind::Long => "long",
            ElementKind::Float => "float",
            ElementKind::Double => "double",
            ElementKind::Object => "object",
        };
        f.write_str(name)
    }
}
