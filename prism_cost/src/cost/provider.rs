//! The node cost query interface and provider selection.
//!
//! Passes hold a `dyn NodeCostProvider` and never care which model answered.
//! Providers are immutable after construction, so one instance can be shared
//! by every compiler thread working on the same target.

use super::amd64::Amd64CostModel;
use super::generic::GenericCostModel;
use super::tier::{NodeCycles, NodeSize};
use crate::ir::{Graph, Node, OpCategory};
use crate::target::{Architecture, TargetDescription};
use rustc_hash::FxHashMap;
use std::sync::Arc;

// =============================================================================
// Provider Trait
// =============================================================================

/// Estimates execution cost and code size of IR nodes.
///
/// Both queries are total: every node gets a tier.
pub trait NodeCostProvider: Send + Sync {
    /// Short model name for diagnostics.
    fn name(&self) -> &'static str;

    /// Expected execution cost of `node`.
    fn cycles(&self, node: &Node) -> NodeCycles;

    /// Expected emitted-code size of `node`.
    fn size(&self, node: &Node) -> NodeSize;

    /// Sum of cycle estimates over every node in `graph`.
    fn estimated_cycles(&self, graph: &Graph) -> u64 {
        graph
            .nodes()
            .map(|node| u64::from(self.cycles(node).value()))
            .sum()
    }

    /// Sum of size estimates over every node in `graph`.
    fn estimated_size(&self, graph: &Graph) -> u64 {
        graph
            .nodes()
            .map(|node| u64::from(self.size(node).value()))
            .sum()
    }

    /// Totals and per-category breakdown for `graph`.
    fn summarize(&self, graph: &Graph) -> CostSummary {
        let mut summary = CostSummary::default();
        for node in graph.nodes() {
            summary.record(
                node.op.category(),
                self.cycles(node).value(),
                self.size(node).value(),
            );
        }
        summary
    }
}

impl<P: NodeCostProvider + ?Sized> NodeCostProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn cycles(&self, node: &Node) -> NodeCycles {
        (**self).cycles(node)
    }

    fn size(&self, node: &Node) -> NodeSize {
        (**self).size(node)
    }

    fn estimated_cycles(&self, graph: &Graph) -> u64 {
        (**self).estimated_cycles(graph)
    }

    fn estimated_size(&self, graph: &Graph) -> u64 {
        (**self).estimated_size(graph)
    }

    fn summarize(&self, graph: &Graph) -> CostSummary {
        (**self).summarize(graph)
    }
}

impl<P: NodeCostProvider + ?Sized> NodeCostProvider for Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn cycles(&self, node: &Node) -> NodeCycles {
        (**self).cycles(node)
    }

    fn size(&self, node: &Node) -> NodeSize {
        (**self).size(node)
    }

    fn estimated_cycles(&self, graph: &Graph) -> u64 {
        (**self).estimated_cycles(graph)
    }

    fn estimated_size(&self, graph: &Graph) -> u64 {
        (**self).estimated_size(graph)
    }

    fn summarize(&self, graph: &Graph) -> CostSummary {
        (**self).summarize(graph)
    }
}

/// Select the cost model for `target`.
///
/// x86-64 gets the AMD64 model; every other architecture uses the generic
/// defaults.
pub fn for_target(target: &TargetDescription) -> Box<dyn NodeCostProvider> {
    let provider: Box<dyn NodeCostProvider> = match target.arch() {
        Architecture::X86_64 => Box::new(Amd64CostModel::new(target)),
        Architecture::AArch64 | Architecture::Generic => Box::new(GenericCostModel::new()),
    };
    tracing::debug!(
        descriptor = %target,
        model = provider.name(),
        "selected node cost provider"
    );
    provider
}

// =============================================================================
// Cost Summary
// =============================================================================

/// Accumulated estimate for one operator category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCost {
    /// Number of nodes in the category.
    pub nodes: usize,
    /// Sum of cycle estimates.
    pub cycles: u64,
    /// Sum of size estimates.
    pub size: u64,
}

/// Whole-graph estimate, as consumed by inlining and unrolling budgets.
#[derive(Debug, Clone, Default)]
pub struct CostSummary {
    /// Total node count.
    pub nodes: usize,
    /// Sum of cycle estimates.
    pub cycles: u64,
    /// Sum of size estimates.
    pub size: u64,
    by_category: FxHashMap<OpCategory, CategoryCost>,
}

impl CostSummary {
    fn record(&mut self, category: OpCategory, cycles: u32, size: u32) {
        self.nodes += 1;
        self.cycles += u64::from(cycles);
        self.size += u64::from(size);
        let entry = self.by_category.entry(category).or_default();
        entry.nodes += 1;
        entry.cycles += u64::from(cycles);
        entry.size += u64::from(size);
    }

    /// Estimate for one category; zero if the graph has no such nodes.
    pub fn category(&self, category: OpCategory) -> CategoryCost {
        self.by_category.get(&category).copied().unwrap_or_default()
    }

    /// Categories present in the graph, most expensive (by cycles) first.
    pub fn hottest_categories(&self) -> Vec<(OpCategory, CategoryCost)> {
        let mut entries: Vec<_> = self
            .by_category
            .iter()
            .map(|(category, cost)| (*category, *cost))
            .collect();
        entries.sort_by(|a, b| b.1.cycles.cmp(&a.1.cycles).then(a.0.cmp(&b.0)));
        entries
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ElementKind, UnaryMathOp};
    use crate::target::CpuFeature;

    fn sample_graph() -> Graph {
        let mut g = Graph::new();
        let a = g.parameter(0);
        let b = g.parameter(1);
        let len = g.const_int(16);
        let eq = g.array_equals(ElementKind::Int, a, b, len);
        let x = g.parameter(2);
        let log = g.math(UnaryMathOp::Log, x);
        let _ = g.int_add(eq, log);
        g.return_value(g.start, log);
        g
    }

    #[test]
    fn test_for_target_selects_amd64() {
        let target = TargetDescription::x86_64([CpuFeature::Avx2]).unwrap();
        assert_eq!(for_target(&target).name(), "amd64");
    }

    #[test]
    fn test_for_target_other_arch_is_generic() {
        let target: TargetDescription = "aarch64+asimd".parse().unwrap();
        assert_eq!(for_target(&target).name(), "generic");
        assert_eq!(for_target(&TargetDescription::generic()).name(), "generic");
    }

    #[test]
    fn test_estimates_are_per_node_sums() {
        let g = sample_graph();
        let target = TargetDescription::x86_64([CpuFeature::Sse41]).unwrap();
        let provider = for_target(&target);

        let cycles: u64 = g
            .nodes()
            .map(|n| u64::from(provider.cycles(n).value()))
            .sum();
        let size: u64 = g.nodes().map(|n| u64::from(provider.size(n).value())).sum();

        assert_eq!(provider.estimated_cycles(&g), cycles);
        assert_eq!(provider.estimated_size(&g), size);
        // 80 (array equals) + 15 (log) + 1 (add) + 6 (return)
        assert_eq!(cycles, 102);
    }

    #[test]
    fn test_summary_categories() {
        let g = sample_graph();
        let provider = GenericCostModel::new();
        let summary = provider.summarize(&g);

        assert_eq!(summary.nodes, g.node_count());
        assert_eq!(summary.cycles, provider.estimated_cycles(&g));
        assert_eq!(summary.size, provider.estimated_size(&g));

        let intrinsics = summary.category(OpCategory::Intrinsic);
        assert_eq!(intrinsics.nodes, 2);
        assert_eq!(intrinsics.cycles, 108);
        assert_eq!(summary.category(OpCategory::Call), CategoryCost::default());

        let hottest = summary.hottest_categories();
        assert_eq!(hottest[0].0, OpCategory::Intrinsic);
    }

    /// Prices every node at one cycle but reports a flat whole-graph budget.
    struct FlatBudget;

    impl NodeCostProvider for FlatBudget {
        fn name(&self) -> &'static str {
            "flat"
        }

        fn cycles(&self, _node: &Node) -> NodeCycles {
            NodeCycles::Cycles1
        }

        fn size(&self, _node: &Node) -> NodeSize {
            NodeSize::Size1
        }

        fn estimated_cycles(&self, _graph: &Graph) -> u64 {
            1000
        }

        fn estimated_size(&self, _graph: &Graph) -> u64 {
            500
        }

        fn summarize(&self, _graph: &Graph) -> CostSummary {
            CostSummary {
                nodes: 1,
                ..CostSummary::default()
            }
        }
    }

    #[test]
    fn test_wrappers_keep_graph_overrides() {
        let g = sample_graph();
        let boxed: Box<dyn NodeCostProvider> = Box::new(FlatBudget);
        let shared: Arc<dyn NodeCostProvider> = Arc::new(FlatBudget);
        let nested: Arc<Box<dyn NodeCostProvider>> = Arc::new(Box::new(FlatBudget));

        for provider in [&boxed as &dyn NodeCostProvider, &shared, &nested] {
            assert_eq!(provider.name(), "flat");
            assert_eq!(provider.estimated_cycles(&g), 1000);
            assert_eq!(provider.estimated_size(&g), 500);
            assert_eq!(provider.summarize(&g).nodes, 1);
        }
    }

    #[test]
    fn test_shared_providers_forward() {
        let target = TargetDescription::x86_64([CpuFeature::Avx2]).unwrap();
        let shared: Arc<dyn NodeCostProvider> = Arc::from(for_target(&target));
        let g = sample_graph();
        assert_eq!(shared.name(), "amd64");
        assert_eq!(
            shared.estimated_cycles(&g),
            Amd64CostModel::new(&target).estimated_cycles(&g)
        );
    }
}
