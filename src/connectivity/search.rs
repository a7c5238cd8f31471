// search.rs
// ──────────────────────────────────────────────────────────────────────────────
// Bidirectional frontier search for a single query.
//
// Edges only ever run `m + n -> m² + n² + 1`, so a chain from `a` alone can
// never come back down to a smaller `b`.  Two frontiers grow forward from `a`
// and from `b`, one node at a time in strict alternation, until one of them
// reaches a value the other has already visited.  Nothing survives the query.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::{HashMap, VecDeque};

use crate::numbers::{NumbersPath, Step, TermDomain, Value};

/// Per-query search over the implicit graph bounded by `max_n`.
#[derive(Clone, Copy, Debug)]
pub struct BidirectionalSearch {
    max_n: Value,
    domain: TermDomain,
}

/// One direction of the search: values waiting to be expanded and the chain
/// that first reached each visited value.
#[derive(Debug, Default)]
struct Frontier {
    queue: VecDeque<Value>,
    visited: HashMap<Value, Vec<Step>>,
}

impl Frontier {
    fn rooted_at(start: Value) -> Self {
        let mut frontier = Self::default();
        frontier.visited.insert(start, Vec::new());
        frontier.queue.push_back(start);
        frontier
    }

    fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Expands the oldest queued value. Returns the meeting value as soon as a
    /// successor is found among `other`'s visited values.
    fn expand(&mut self, other: &Frontier, max_n: Value, min_term: Value) -> Option<Value> {
        let value = self.queue.pop_front()?;
        let reached = self.visited.get(&value).cloned().unwrap_or_default();

        for m in min_term..=max_n {
            // Past `value` the partner term would be negative.
            let Some(n) = value.checked_sub(m) else {
                break;
            };
            if n < min_term || n > max_n {
                continue;
            }
            let step = Step::new(m, n);
            let next = step.next_value();
            if next > max_n {
                continue;
            }

            if !self.visited.contains_key(&next) {
                let mut chain = reached.clone();
                chain.push(step);
                self.visited.insert(next, chain);
                self.queue.push_back(next);
            }
            if other.visited.contains_key(&next) {
                return Some(next);
            }
        }
        None
    }
}

impl BidirectionalSearch {
    pub fn new(max_n: Value, domain: TermDomain) -> Self {
        Self { max_n, domain }
    }

    /// Searches for two forward chains from `a` and `b` that meet inside `[1, max_n]`.
    ///
    /// The first meeting found wins; it is a valid witness but not necessarily
    /// the shortest. Returns `None` once both frontiers run dry.
    pub fn find_path(&self, a: Value, b: Value) -> Option<NumbersPath> {
        if a == b {
            return Some(NumbersPath::new(a, b, Vec::new(), Vec::new()));
        }

        let min_term = self.domain.min_term();
        let mut side_a = Frontier::rooted_at(a);
        let mut side_b = Frontier::rooted_at(b);

        while !(side_a.is_exhausted() && side_b.is_exhausted()) {
            if let Some(meet) = side_a.expand(&side_b, self.max_n, min_term) {
                return join(a, b, &side_a, &side_b, meet);
            }
            if let Some(meet) = side_b.expand(&side_a, self.max_n, min_term) {
                return join(a, b, &side_a, &side_b, meet);
            }
        }
        None
    }
}

fn join(
    a: Value,
    b: Value,
    side_a: &Frontier,
    side_b: &Frontier,
    meet: Value,
) -> Option<NumbersPath> {
    let steps_a = side_a.visited.get(&meet)?.clone();
    let steps_b = side_b.visited.get(&meet)?.clone();
    Some(NumbersPath::new(a, b, steps_a, steps_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(pairs: &[(Value, Value)]) -> Vec<Step> {
        pairs.iter().map(|&(m, n)| Step::new(m, n)).collect()
    }

    #[test]
    fn finds_direct_step() {
        for domain in [TermDomain::Natural, TermDomain::Positive] {
            let search = BidirectionalSearch::new(3, domain);
            assert_eq!(
                search.find_path(2, 3),
                Some(NumbersPath::new(2, 3, steps(&[(1, 1)]), vec![]))
            );
        }
    }

    #[test]
    fn b_side_can_reach_a() {
        let search = BidirectionalSearch::new(3, TermDomain::Natural);
        assert_eq!(
            search.find_path(3, 2),
            Some(NumbersPath::new(3, 2, vec![], steps(&[(1, 1)])))
        );
    }

    #[test]
    fn longer_chain_on_one_side() {
        let search = BidirectionalSearch::new(10, TermDomain::Natural);
        assert_eq!(
            search.find_path(1, 6),
            Some(NumbersPath::new(1, 6, steps(&[(0, 1), (1, 1), (1, 2)]), vec![]))
        );
    }

    #[test]
    fn frontiers_meet_in_the_middle() {
        let search = BidirectionalSearch::new(30, TermDomain::Natural);
        let path = search.find_path(5, 7).expect("5 and 7 meet at 26");
        assert_eq!(path.steps_a, steps(&[(0, 5)]));
        assert_eq!(path.steps_b, steps(&[(3, 4)]));
    }

    #[test]
    fn exhausted_frontiers_return_none() {
        let search = BidirectionalSearch::new(10, TermDomain::Natural);
        assert_eq!(search.find_path(5, 6), None);
        assert_eq!(search.find_path(2, 4), None);
        assert_eq!(search.find_path(7, 8), None);
    }

    #[test]
    fn positive_domain_skips_zero_terms() {
        // 1 -> 2 needs the pair (0, 1).
        assert!(BidirectionalSearch::new(3, TermDomain::Natural)
            .find_path(1, 2)
            .is_some());
        assert_eq!(
            BidirectionalSearch::new(3, TermDomain::Positive).find_path(1, 2),
            None
        );
    }

    #[test]
    fn same_endpoint_needs_no_steps() {
        let search = BidirectionalSearch::new(10, TermDomain::Natural);
        assert_eq!(
            search.find_path(7, 7),
            Some(NumbersPath::new(7, 7, vec![], vec![]))
        );
    }
}
