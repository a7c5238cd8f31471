// index.rs
// ──────────────────────────────────────────────────────────────────────────────
// Union-find over `[1, N]` with a witness forest on the side.
//
// `parent` is a classic path-compressed disjoint-set array and answers "same
// class?" quickly.  Compression rewrites links, so it cannot remember *why* two
// values were merged.  That is the job of the witness forest: an uncompressed
// spanning forest made only of the edges that actually merged two classes.
// Every non-root node of the forest carries a `WitnessLink` toward its tree
// parent.  Both structures are private and only `union` mutates them.
// ──────────────────────────────────────────────────────────────────────────────
use crate::numbers::{EdgeGenerator, Step, TermDomain, Value};

use super::error::CheckError;

/// The edge that ties a node to its parent in the witness forest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WitnessLink {
    /// The parent node.
    pub toward: Value,
    /// The pair that produced the edge.
    pub step: Step,
    /// `true` if `step` maps this node onto `toward`, `false` if it maps `toward` onto this node.
    pub forward: bool,
}

/// Equivalence classes of `[1, N]` under the sum/square-sum relation.
#[derive(Clone, Debug)]
pub struct ConnectivityIndex {
    max_n: Value,
    parent: Vec<Value>,
    links: Vec<Option<WitnessLink>>,
}

impl ConnectivityIndex {
    /// Creates an index where every value is its own class. Slot 0 is unused.
    pub fn new(max_n: Value) -> Self {
        Self {
            max_n,
            parent: (0..=max_n).collect(),
            links: vec![None; max_n + 1],
        }
    }

    /// Runs the full edge pass for `max_n` and `domain`.
    ///
    /// Edges are merged in generation order, so the first edge that joins two
    /// classes is the one remembered as their witness.
    pub fn build(max_n: Value, domain: TermDomain) -> Self {
        let mut index = Self::new(max_n);
        for edge in EdgeGenerator::new(max_n, domain) {
            index.union(edge.sum, edge.sq_sum1, edge.step.m(), edge.step.n());
        }
        index
    }

    /// Returns the representative of `x`'s class, compressing the walked links.
    pub fn find(&mut self, x: Value) -> Value {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the classes of `x` and `y`, which are related through `(m, n)`.
    ///
    /// `x`'s root is attached under `y`'s root. Returns `false` without touching
    /// anything if both already share a class.
    pub fn union(&mut self, x: Value, y: Value, m: Value, n: Value) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        self.parent[root_x] = root_y;

        let step = Step::new(m, n);
        self.evert(x);
        self.links[x] = Some(WitnessLink {
            toward: y,
            step,
            forward: step.sum() == x,
        });
        true
    }

    /// The link from `x` toward its witness-forest parent, `None` for a tree root.
    pub fn witness_link(&self, x: Value) -> Option<WitnessLink> {
        self.links.get(x).copied().flatten()
    }

    /// Checks that every value in `[1, max_n]` shares the class of 1.
    ///
    /// # Errors
    /// `CheckError::Disconnected` naming the smallest value outside that class.
    pub fn verify_single_component(&mut self) -> Result<(), CheckError> {
        if self.max_n == 0 {
            return Ok(());
        }
        let root = self.find(1);
        for value in 2..=self.max_n {
            if self.find(value) != root {
                return Err(CheckError::Disconnected {
                    value,
                    max_n: self.max_n,
                });
            }
        }
        Ok(())
    }

    /// All classes, each sorted ascending, ordered by their smallest member.
    pub fn classes(&mut self) -> Vec<Vec<Value>> {
        let mut slot_of_root: Vec<Option<usize>> = vec![None; self.max_n + 1];
        let mut classes: Vec<Vec<Value>> = Vec::new();
        for value in 1..=self.max_n {
            let root = self.find(value);
            match slot_of_root[root] {
                Some(slot) => classes[slot].push(value),
                None => {
                    slot_of_root[root] = Some(classes.len());
                    classes.push(vec![value]);
                }
            }
        }
        classes
    }

    /// Re-roots the witness tree containing `x` at `x` by reversing the links
    /// on the walk from `x` to the old root.
    fn evert(&mut self, x: Value) {
        let mut node = x;
        let mut carried: Option<WitnessLink> = None;
        loop {
            let previous = std::mem::replace(&mut self.links[node], carried);
            match previous {
                Some(link) => {
                    carried = Some(WitnessLink {
                        toward: node,
                        step: link.step,
                        forward: !link.forward,
                    });
                    node = link.toward;
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_links_are_real_edges(index: &ConnectivityIndex) {
        for node in 1..=index.max_n {
            if let Some(link) = index.witness_link(node) {
                let (from, to) = if link.forward {
                    (node, link.toward)
                } else {
                    (link.toward, node)
                };
                assert_eq!(link.step.sum(), from, "link at {node}");
                assert_eq!(link.step.next_value(), to, "link at {node}");
            }
        }
    }

    /// Follows witness links from `x`, failing if the walk outgrows the forest.
    fn witness_root(index: &ConnectivityIndex, x: Value) -> Value {
        let mut node = x;
        for _ in 0..=index.max_n {
            match index.witness_link(node) {
                Some(link) => node = link.toward,
                None => return node,
            }
        }
        panic!("witness walk from {x} does not terminate");
    }

    #[test]
    fn fresh_index_has_singleton_classes() {
        let mut index = ConnectivityIndex::new(5);
        assert_eq!(index.classes().len(), 5);
        for value in 1..=5 {
            assert_eq!(index.find(value), value);
            assert_eq!(index.witness_link(value), None);
        }
    }

    #[test]
    fn union_attaches_x_root_under_y_root() {
        let mut index = ConnectivityIndex::new(3);
        assert!(index.union(1, 2, 0, 1));
        assert_eq!(index.find(1), 2);
        assert!(index.union(2, 3, 1, 1));
        assert_eq!(index.find(1), 3);
        assert_eq!(index.find(2), 3);
        assert_eq!(
            index.witness_link(2),
            Some(WitnessLink {
                toward: 3,
                step: Step::new(1, 1),
                forward: true,
            })
        );
    }

    #[test]
    fn repeated_union_changes_nothing() {
        let mut index = ConnectivityIndex::build(10, TermDomain::Natural);
        let parent = index.parent.clone();
        let links = index.links.clone();
        assert!(!index.union(3, 6, 1, 2));
        assert!(!index.union(3, 6, 2, 1));
        assert_eq!(index.parent, parent);
        assert_eq!(index.links, links);
    }

    #[test]
    fn union_reroots_the_merged_tree() {
        let mut index = ConnectivityIndex::new(10);
        // 3 -> 10, then 6 joins through 3 -> 6, which hangs 3 under 6.
        index.union(3, 10, 0, 3);
        index.union(3, 6, 1, 2);
        assert_eq!(index.witness_link(3).map(|l| l.toward), Some(6));
        assert_eq!(
            index.witness_link(10),
            Some(WitnessLink {
                toward: 3,
                step: Step::new(0, 3),
                forward: false,
            })
        );
        assert_eq!(witness_root(&index, 10), 6);
        assert_links_are_real_edges(&index);
    }

    #[test]
    fn small_bound_forms_one_class() {
        let mut index = ConnectivityIndex::build(3, TermDomain::Natural);
        assert_eq!(index.verify_single_component(), Ok(()));
        assert_eq!(index.classes().len(), 1);
    }

    #[test]
    fn positive_domain_isolates_one() {
        let mut index = ConnectivityIndex::build(3, TermDomain::Positive);
        assert_eq!(
            index.verify_single_component(),
            Err(CheckError::Disconnected { value: 2, max_n: 3 })
        );
    }

    #[test]
    fn bound_ten_splits_into_four_classes() {
        let mut index = ConnectivityIndex::build(10, TermDomain::Natural);
        assert_eq!(
            index.verify_single_component(),
            Err(CheckError::Disconnected { value: 4, max_n: 10 })
        );
        assert_eq!(
            index.classes(),
            vec![vec![1, 2, 3, 5, 6, 10], vec![4, 9], vec![7], vec![8]]
        );
        assert_eq!(index.classes().len(), 4);

        let mut positive = ConnectivityIndex::build(10, TermDomain::Positive);
        assert_eq!(positive.classes().len(), 7);
    }

    #[test]
    fn empty_bound_verifies_trivially() {
        let mut index = ConnectivityIndex::new(0);
        assert_eq!(index.verify_single_component(), Ok(()));
        assert!(index.classes().is_empty());
    }

    proptest! {
        #[test]
        fn forest_stays_consistent_under_random_unions(
            ops in prop::collection::vec((1usize..=30, 1usize..=30, 0usize..6, 0usize..6), 0..80)
        ) {
            let mut index = ConnectivityIndex::new(30);
            for &(x, y, m, n) in &ops {
                index.union(x, y, m, n);
            }
            for x in 1..=30 {
                let root = index.find(x);
                prop_assert_eq!(index.find(root), root);
                prop_assert_eq!(index.find(x), root);
                // The witness tree of x lives inside x's class.
                let tree_root = witness_root(&index, x);
                prop_assert_eq!(index.find(tree_root), root);
            }
        }

        #[test]
        fn repeating_the_last_union_is_a_no_op(
            ops in prop::collection::vec((1usize..=20, 1usize..=20, 0usize..5, 0usize..5), 1..40)
        ) {
            let mut index = ConnectivityIndex::new(20);
            for &(x, y, m, n) in &ops {
                index.union(x, y, m, n);
            }
            let roots: Vec<Value> = (1..=20).map(|v| index.find(v)).collect();
            let links = index.links.clone();
            let &(x, y, m, n) = ops.last().unwrap();
            prop_assert!(!index.union(x, y, m, n));
            let after: Vec<Value> = (1..=20).map(|v| index.find(v)).collect();
            prop_assert_eq!(roots, after);
            prop_assert_eq!(links, index.links.clone());
        }

        #[test]
        fn generated_witnesses_are_real_edges(max_n in 1usize..=80, positive in any::<bool>()) {
            let domain = if positive { TermDomain::Positive } else { TermDomain::Natural };
            let index = ConnectivityIndex::build(max_n, domain);
            assert_links_are_real_edges(&index);
        }
    }
}
