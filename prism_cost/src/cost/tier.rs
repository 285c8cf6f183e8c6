//! Coarse cost and size tiers.
//!
//! Tiers stand in for cycle and byte counts. They are deliberately coarse:
//! heuristics compare tiers, and the same tier names are used on every
//! architecture. Declaration order matches estimate order, so the derived
//! `Ord` compares by estimate.

use std::fmt;

/// Expected execution cost of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeCycles {
    Cycles0,
    Cycles1,
    Cycles2,
    Cycles3,
    Cycles4,
    Cycles5,
    Cycles6,
    Cycles8,
    Cycles10,
    Cycles15,
    Cycles20,
    Cycles30,
    Cycles40,
    Cycles50,
    Cycles80,
    Cycles100,
    Cycles200,
    Cycles500,
}

impl NodeCycles {
    /// All tiers in ascending order.
    pub const ALL: [NodeCycles; 18] = [
        NodeCycles::Cycles0,
        NodeCycles::Cycles1,
        NodeCycles::Cycles2,
        NodeCycles::Cycles3,
        NodeCycles::Cycles4,
        NodeCycles::Cycles5,
        NodeCycles::Cycles6,
        NodeCycles::Cycles8,
        NodeCycles::Cycles10,
        NodeCycles::Cycles15,
        NodeCycles::Cycles20,
        NodeCycles::Cycles30,
        NodeCycles::Cycles40,
        NodeCycles::Cycles50,
        NodeCycles::Cycles80,
        NodeCycles::Cycles100,
        NodeCycles::Cycles200,
        NodeCycles::Cycles500,
    ];

    /// Estimated cycles for this tier.
    pub const fn value(self) -> u32 {
        match self {
            NodeCycles::Cycles0 => 0,
            NodeCycles::Cycles1 => 1,
            NodeCycles::Cycles2 => 2,
            NodeCycles::Cycles3 => 3,
            NodeCycles::Cycles4 => 4,
            NodeCycles::Cycles5 => 5,
            NodeCycles::Cycles6 => 6,
            NodeCycles::Cycles8 => 8,
            NodeCycles::Cycles10 => 10,
            NodeCycles::Cycles15 => 15,
            NodeCycles::Cycles20 => 20,
            NodeCycles::Cycles30 => 30,
            NodeCycles::Cycles40 => 40,
            NodeCycles::Cycles50 => 50,
            NodeCycles::Cycles80 => 80,
            NodeCycles::Cycles100 => 100,
            NodeCycles::Cycles200 => 200,
            NodeCycles::Cycles500 => 500,
        }
    }
}

impl fmt::Display for NodeCycles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cycles", self.value())
    }
}

/// Expected emitted-code size of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeSize {
    Size0,
    Size1,
    Size2,
    Size3,
    Size4,
    Size6,
    Size8,
    Size10,
    Size15,
    Size20,
    Size30,
    Size40,
    Size50,
    Size80,
    Size100,
    Size200,
}

impl NodeSize {
    /// All tiers in ascending order.
    pub const ALL: [NodeSize; 16] = [
        NodeSize::Size0,
        NodeSize::Size1,
        NodeSize::Size2,
        NodeSize::Size3,
        NodeSize::Size4,
        NodeSize::Size6,
        NodeSize::Size8,
        NodeSize::Size10,
        NodeSize::Size15,
        NodeSize::Size20,
        NodeSize::Size30,
        NodeSize::Size40,
        NodeSize::Size50,
        NodeSize::Size80,
        NodeSize::Size100,
        NodeSize::Size200,
    ];

    /// Estimated size for this tier, in machine-instruction units.
    pub const fn value(self) -> u32 {
        match self {
            NodeSize::Size0 => 0,
            NodeSize::Size1 => 1,
            NodeSize::Size2 => 2,
            NodeSize::Size3 => 3,
            NodeSize::Size4 => 4,
            NodeSize::Size6 => 6,
            NodeSize::Size8 => 8,
            NodeSize::Size10 => 10,
            NodeSize::Size15 => 15,
            NodeSize::Size20 => 20,
            NodeSize::Size30 => 30,
            NodeSize::Size40 => 40,
            NodeSize::Size50 => 50,
            NodeSize::Size80 => 80,
            NodeSize::Size100 => 100,
            NodeSize::Size200 => 200,
        }
    }
}

impl fmt::Display for NodeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size {}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_order_matches_value() {
        for pair in NodeCycles::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
    }

    #[test]
    fn test_size_order_matches_value() {
        for pair in NodeSize::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeCycles::Cycles80.to_string(), "80 cycles");
        assert_eq!(NodeSize::Size30.to_string(), "size 30");
    }
}
