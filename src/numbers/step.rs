use std::fmt;

use super::edges::TermDomain;
use super::error::{PathViolation, Side};

/// An integer in `[1, N]`, or a term `m`/`n` of a step.
pub type Value = usize;

/// Returns `m + n`, the value a step starts from.
pub fn sum(m: Value, n: Value) -> Value {
    m.saturating_add(n)
}

/// Returns `m² + n² + 1`, the value a step leads to.
///
/// Saturates instead of overflowing; a saturated value is larger than any
/// usable bound and gets pruned like every other out-of-range value.
pub fn sq_sum1(m: Value, n: Value) -> Value {
    m.saturating_mul(m)
        .saturating_add(n.saturating_mul(n))
        .saturating_add(1)
}

//─────────────────────────────────────────────────────────────────────────────

/// A witness `(m, n)`: the value `m + n` is related to `m² + n² + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    m: Value,
    n: Value,
}

impl Step {
    pub fn new(m: Value, n: Value) -> Self {
        Self { m, n }
    }

    pub fn m(&self) -> Value {
        self.m
    }

    pub fn n(&self) -> Value {
        self.n
    }

    /// The value this step departs from.
    pub fn sum(&self) -> Value {
        sum(self.m, self.n)
    }

    /// The value this step arrives at.
    pub fn next_value(&self) -> Value {
        sq_sum1(self.m, self.n)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.m, self.n)
    }
}

//─────────────────────────────────────────────────────────────────────────────

/// Two witness chains, one from `a` and one from `b`, that end on the same value.
///
/// Folding `sum -> next_value` along `steps_a` starting at `a`, and along
/// `steps_b` starting at `b`, reaches the meeting point. Either list may be
/// empty when its endpoint already is the meeting point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumbersPath {
    pub a: Value,
    pub b: Value,
    pub steps_a: Vec<Step>,
    pub steps_b: Vec<Step>,
}

impl NumbersPath {
    pub fn new(a: Value, b: Value, steps_a: Vec<Step>, steps_b: Vec<Step>) -> Self {
        Self {
            a,
            b,
            steps_a,
            steps_b,
        }
    }

    /// The value reached by the `a` chain. Equals the meeting point of a valid path.
    pub fn meeting_value(&self) -> Value {
        self.steps_a.last().map_or(self.a, Step::next_value)
    }

    /// Folds both chains under `max_n` and `domain`, returning the meeting value.
    ///
    /// # Errors
    /// Returns the first `PathViolation` found, checking the `a` chain before the `b` chain.
    pub fn verify(&self, max_n: Value, domain: TermDomain) -> Result<Value, PathViolation> {
        let end_a = fold_side(Side::A, self.a, &self.steps_a, max_n, domain)?;
        let end_b = fold_side(Side::B, self.b, &self.steps_b, max_n, domain)?;
        if end_a != end_b {
            return Err(PathViolation::Diverged { end_a, end_b });
        }
        Ok(end_a)
    }
}

impl fmt::Display for NumbersPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={}: ", self.a)?;
        write_chain(f, self.a, &self.steps_a)?;
        write!(f, "; b={}: ", self.b)?;
        write_chain(f, self.b, &self.steps_b)
    }
}

fn write_chain(f: &mut fmt::Formatter<'_>, start: Value, steps: &[Step]) -> fmt::Result {
    write!(f, "{}", start)?;
    for step in steps {
        write!(f, " -{}-> {}", step, step.next_value())?;
    }
    Ok(())
}

fn fold_side(
    side: Side,
    start: Value,
    steps: &[Step],
    max_n: Value,
    domain: TermDomain,
) -> Result<Value, PathViolation> {
    if start < 1 || start > max_n {
        return Err(PathViolation::EndpointOutOfBounds {
            side,
            value: start,
            max_n,
        });
    }

    let min_term = domain.min_term();
    let mut current = start;
    for (index, step) in steps.iter().enumerate() {
        if step.m() < min_term || step.n() < min_term {
            return Err(PathViolation::TermBelowDomain {
                side,
                index,
                step: *step,
                min_term,
            });
        }
        if step.sum() != current {
            return Err(PathViolation::StepMismatch {
                side,
                index,
                expected: current,
                found: step.sum(),
            });
        }
        current = step.next_value();
        if current > max_n {
            return Err(PathViolation::OutOfBounds {
                side,
                index,
                value: current,
                max_n,
            });
        }
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_maps_sum_to_sq_sum1() {
        let step = Step::new(1, 2);
        assert_eq!(step.sum(), 3);
        assert_eq!(step.next_value(), 6);
        assert_eq!(Step::new(0, 3).next_value(), 10);
    }

    #[test]
    fn sq_sum1_saturates_instead_of_overflowing() {
        assert_eq!(sq_sum1(Value::MAX, 1), Value::MAX);
    }

    #[test]
    fn verify_accepts_one_sided_chain() {
        let path = NumbersPath::new(2, 3, vec![Step::new(1, 1)], vec![]);
        assert_eq!(path.verify(3, TermDomain::Positive), Ok(3));
        assert_eq!(path.meeting_value(), 3);
    }

    #[test]
    fn verify_accepts_two_sided_chain() {
        let path = NumbersPath::new(5, 7, vec![Step::new(0, 5)], vec![Step::new(3, 4)]);
        assert_eq!(path.verify(30, TermDomain::Natural), Ok(26));
    }

    #[test]
    fn verify_reports_mismatched_step() {
        let path = NumbersPath::new(2, 6, vec![Step::new(1, 1), Step::new(2, 2)], vec![]);
        assert_eq!(
            path.verify(10, TermDomain::Natural),
            Err(PathViolation::StepMismatch {
                side: Side::A,
                index: 1,
                expected: 3,
                found: 4,
            })
        );
    }

    #[test]
    fn verify_reports_zero_term_in_positive_domain() {
        let path = NumbersPath::new(1, 2, vec![Step::new(0, 1)], vec![]);
        assert!(path.verify(3, TermDomain::Natural).is_ok());
        assert!(matches!(
            path.verify(3, TermDomain::Positive),
            Err(PathViolation::TermBelowDomain { index: 0, .. })
        ));
    }

    #[test]
    fn verify_reports_values_past_the_bound() {
        let path = NumbersPath::new(3, 10, vec![], vec![]);
        assert_eq!(
            path.verify(9, TermDomain::Natural),
            Err(PathViolation::EndpointOutOfBounds {
                side: Side::B,
                value: 10,
                max_n: 9,
            })
        );
        let path = NumbersPath::new(3, 3, vec![Step::new(0, 3)], vec![]);
        assert!(matches!(
            path.verify(9, TermDomain::Natural),
            Err(PathViolation::OutOfBounds { value: 10, .. })
        ));
    }

    #[test]
    fn verify_reports_divergent_chains() {
        let path = NumbersPath::new(2, 4, vec![Step::new(1, 1)], vec![]);
        assert_eq!(
            path.verify(10, TermDomain::Natural),
            Err(PathViolation::Diverged { end_a: 3, end_b: 4 })
        );
    }

    #[test]
    fn display_lists_each_chain() {
        let path = NumbersPath::new(5, 7, vec![Step::new(0, 5)], vec![Step::new(3, 4)]);
        assert_eq!(path.to_string(), "a=5: 5 -(0,5)-> 26; b=7: 7 -(3,4)-> 26");
        let empty = NumbersPath::new(4, 4, vec![], vec![]);
        assert_eq!(empty.to_string(), "a=4: 4; b=4: 4");
    }
}
