//! Logical plan: a DAG of operators rooted at the terminal node.
//!
//! The plan owns no data and performs no work; it is a shared, read-only
//! description handed to the optimizer and the physical translator.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::operator::{LogicalOperator, OperatorRef};

/// A logical plan, addressed through its root operator.
#[derive(Debug, Clone)]
pub struct LogicalPlan {
    root: OperatorRef,
}

impl LogicalPlan {
    pub fn new(root: OperatorRef) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &OperatorRef {
        &self.root
    }

    /// Operators in post order: every dependency before its dependent, the
    /// root last. This is the order bottom-up passes visit nodes in.
    ///
    /// An operator reachable along several paths (a diamond in the DAG,
    /// expressed through `Arc` sharing) appears exactly once.
    pub fn post_order(&self) -> Vec<OperatorRef> {
        fn visit(op: &OperatorRef, seen: &mut HashSet<*const ()>, out: &mut Vec<OperatorRef>) {
            if !seen.insert(node_id(op)) {
                return;
            }
            for dep in op.input_dependencies() {
                visit(dep, seen, out);
            }
            out.push(op.clone());
        }
        let mut out = Vec::new();
        visit(&self.root, &mut HashSet::new(), &mut out);
        out
    }

    /// Number of operator nodes reachable from the root.
    pub fn operator_count(&self) -> usize {
        self.post_order().len()
    }

    /// Longest dependency chain, root included.
    pub fn depth(&self) -> usize {
        fn depth_of(op: &dyn LogicalOperator) -> usize {
            1 + op
                .input_dependencies()
                .iter()
                .map(|d| depth_of(d.as_ref()))
                .max()
                .unwrap_or(0)
        }
        depth_of(self.root.as_ref())
    }

    /// Whether any reachable operator satisfies `predicate`. Shared nodes are
    /// tested once.
    pub fn contains_op<F>(&self, predicate: F) -> bool
    where
        F: Fn(&dyn LogicalOperator) -> bool,
    {
        let mut seen: HashSet<*const ()> = HashSet::new();
        let mut queue: VecDeque<&OperatorRef> = VecDeque::from([&self.root]);
        while let Some(op) = queue.pop_front() {
            if !seen.insert(node_id(op)) {
                continue;
            }
            if predicate(op.as_ref()) {
                return true;
            }
            queue.extend(op.input_dependencies());
        }
        false
    }

    /// Tree rendering of the DAG, root first, dependencies indented below.
    pub fn dag_str(&self) -> String {
        fn render(op: &dyn LogicalOperator, indent: usize, out: &mut String) {
            out.push_str(&"  ".repeat(indent));
            out.push_str(op.name());
            out.push('\n');
            for dep in op.input_dependencies() {
                render(dep.as_ref(), indent + 1, out);
            }
        }
        let mut out = String::new();
        render(self.root.as_ref(), 0, &mut out);
        out
    }

    /// Serializable snapshot of the plan shape, for diagnostics and logs.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            operator_names: self.post_order().iter().map(|op| op.name().to_string()).collect(),
            operator_count: self.operator_count(),
            depth: self.depth(),
        }
    }
}

/// Traversal identity of a node: the thin form of its `Arc` address.
fn node_id(op: &OperatorRef) -> *const () {
    Arc::as_ptr(op) as *const ()
}

impl fmt::Display for LogicalPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dag_str())
    }
}

impl<T: LogicalOperator + 'static> From<T> for LogicalPlan {
    fn from(root: T) -> Self {
        Self::new(Arc::new(root))
    }
}

/// Plan shape as plain data; what `LogicalPlan` itself cannot be (trait
/// objects do not serialize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Operator names in post order.
    pub operator_names: Vec<String>,
    pub operator_count: usize,
    pub depth: usize,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use skein_core::block::BlockMetadata;
    use skein_core::schema::Schema;

    use super::*;
    use crate::limit::Limit;
    use crate::operator::OperatorBase;
    use crate::testing::StubSource;

    /// Minimal n-ary node, for building diamond-shaped plans.
    #[derive(Debug)]
    struct FanIn {
        base: OperatorBase,
    }

    impl FanIn {
        fn new(deps: Vec<OperatorRef>) -> Self {
            Self {
                base: OperatorBase::new("fan_in", deps, None),
            }
        }
    }

    impl LogicalOperator for FanIn {
        fn name(&self) -> &str {
            self.base.name()
        }
        fn input_dependencies(&self) -> &[OperatorRef] {
            self.base.input_dependencies()
        }
        fn num_outputs(&self) -> Option<usize> {
            self.base.num_outputs()
        }
        fn infer_metadata(&self) -> BlockMetadata {
            BlockMetadata::unknown()
        }
        fn infer_schema(&self) -> Option<Schema> {
            None
        }
    }

    fn two_node_plan() -> LogicalPlan {
        let src: OperatorRef = Arc::new(StubSource::with_rows(100));
        LogicalPlan::from(Limit::new(src, 10))
    }

    #[test]
    fn post_order_puts_root_last() {
        let plan = two_node_plan();
        let order = plan.post_order();
        assert_eq!(order.len(), 2);
        assert_eq!(order[0].name(), "stub_source");
        assert_eq!(order[1].name(), "limit=10");
    }

    #[test]
    fn shape_helpers_agree() {
        let plan = two_node_plan();
        assert_eq!(plan.operator_count(), 2);
        assert_eq!(plan.depth(), 2);
        assert!(plan.contains_op(|op| op.name().starts_with("limit=")));
        assert!(!plan.contains_op(|op| op.name() == "shuffle"));
    }

    #[test]
    fn dag_str_indents_dependencies() {
        let rendered = two_node_plan().dag_str();
        assert_eq!(rendered, "limit=10\n  stub_source\n");
    }

    #[test]
    fn diamond_plan_counts_shared_nodes_once() {
        let src: OperatorRef = Arc::new(StubSource::with_rows(100));
        let left: OperatorRef = Arc::new(Limit::new(src.clone(), 5));
        let right: OperatorRef = Arc::new(Limit::new(src.clone(), 7));
        let plan = LogicalPlan::from(FanIn::new(vec![left, right]));

        assert_eq!(plan.operator_count(), 4);
        let order = plan.post_order();
        assert_eq!(order.iter().filter(|op| Arc::ptr_eq(op, &src)).count(), 1);
        assert_eq!(order[0].name(), "stub_source");
        assert_eq!(order[3].name(), "fan_in");
        assert!(plan.contains_op(|op| op.name() == "stub_source"));
    }

    #[test]
    fn summary_serde_round_trip() {
        let summary = two_node_plan().summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: PlanSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, back);
        assert_eq!(back.operator_names, vec!["stub_source", "limit=10"]);
    }
}
