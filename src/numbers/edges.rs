// edges.rs
// ──────────────────────────────────────────────────────────────────────────────
// Enumerate every edge `m + n -> m² + n² + 1` whose endpoints both lie in
// `[1, N]`.  Pairs are produced with `m` in the outer loop and `n` in the inner
// loop, both ascending from the domain minimum.  That order decides which
// witness the connectivity index keeps when several pairs merge the same two
// classes, so it is part of the contract.
// ──────────────────────────────────────────────────────────────────────────────
use clap::ValueEnum;

use super::step::{sq_sum1, Step, Value};

/// The range the terms `m` and `n` are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum TermDomain {
    /// `m, n >= 0`.
    #[default]
    Natural,
    /// `m, n >= 1`.
    Positive,
}

impl TermDomain {
    pub fn min_term(self) -> Value {
        match self {
            TermDomain::Natural => 0,
            TermDomain::Positive => 1,
        }
    }
}

/// One edge of the implicit graph together with the pair that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub sum: Value,
    pub sq_sum1: Value,
    pub step: Step,
}

/// Lazy iterator over all edges within a bound.
#[derive(Clone, Debug)]
pub struct EdgeGenerator {
    max_n: Value,
    min_term: Value,
    m: Value,
    n: Value,
}

impl EdgeGenerator {
    pub fn new(max_n: Value, domain: TermDomain) -> Self {
        let min_term = domain.min_term();
        Self {
            max_n,
            min_term,
            m: min_term,
            n: min_term,
        }
    }
}

impl Iterator for EdgeGenerator {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        loop {
            // `m² + min² + 1` only grows with `m`, so nothing further can fit.
            if self.m > self.max_n || sq_sum1(self.m, self.min_term) > self.max_n {
                return None;
            }
            if self.n > self.max_n || sq_sum1(self.m, self.n) > self.max_n {
                self.m += 1;
                self.n = self.min_term;
                continue;
            }

            let step = Step::new(self.m, self.n);
            self.n += 1;

            let sum = step.sum();
            if (1..=self.max_n).contains(&sum) {
                return Some(Edge {
                    sum,
                    sq_sum1: step.next_value(),
                    step,
                });
            }
        }
    }
}
