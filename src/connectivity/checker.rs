//! The checker façade and the two interchangeable path-finding strategies.
//!
//! A `Checker` owns one `PathFinder`, chosen at construction:
//! - `Strategy::UnionFind` materializes a `ConnectivityIndex` once and answers
//!   queries from its witness forest, searching forward only inside a class.
//! - `Strategy::Bidirectional` keeps no state and runs a fresh frontier search
//!   per query.
//!
//! Both strategies share the same edge rule and the same bound, and both report
//! "no path" as a `PathLookup::NotFound` value. Errors are reserved for invalid
//! input and for a failed full-coverage check.

use clap::ValueEnum;

use crate::numbers::{NumbersPath, TermDomain, Value};

use super::error::CheckError;
use super::index::ConnectivityIndex;
use super::reconstruct::reconstruct;
use super::search::BidirectionalSearch;

/// Which algorithm a `Checker` runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Materialized union-find index.
    #[default]
    UnionFind,
    /// Per-query bidirectional search.
    Bidirectional,
}

/// Why a query produced no path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The index places the endpoints in different classes.
    SeparateClasses,
    /// No two forward chains from the endpoints meet within the bound.
    NoMeetingPoint,
}

/// Outcome of a path query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathLookup {
    Found(NumbersPath),
    NotFound(NotFoundReason),
}

impl PathLookup {
    pub fn path(&self) -> Option<&NumbersPath> {
        match self {
            PathLookup::Found(path) => Some(path),
            PathLookup::NotFound(_) => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathLookup::Found(_))
    }
}

/// Outcome of a successful `run_check`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Every value in `[1, max_n]` shares a single class.
    Verified { max_n: Value },
    /// The strategy does no global work; queries are answered on demand.
    Deferred,
}

/// The capability both strategies provide.
pub trait PathFinder {
    /// Performs whatever global verification the strategy supports.
    fn run_check(&mut self) -> Result<CheckOutcome, CheckError>;

    /// Looks up a witness path. Endpoints are already known to be in range.
    fn get_path(&mut self, a: Value, b: Value) -> PathLookup;

    /// The classes of `[1, max_n]`, if the strategy materializes them.
    fn classes(&mut self) -> Option<Vec<Vec<Value>>> {
        None
    }
}

//─────────────────────────────────────────────────────────────────────────────

/// Union-find strategy. The index is built on first use and kept for the
/// lifetime of the finder.
///
/// The witness forest holds one spanning tree per class, and its tree path
/// between two values is not always a pair of forward chains. Such pairs
/// fall back to a forward search, which only runs once the index has placed
/// both endpoints in the same class.
#[derive(Debug)]
pub struct UnionFindFinder {
    max_n: Value,
    domain: TermDomain,
    index: Option<ConnectivityIndex>,
    fallback: BidirectionalSearch,
}

impl UnionFindFinder {
    pub fn new(max_n: Value, domain: TermDomain) -> Self {
        Self {
            max_n,
            domain,
            index: None,
            fallback: BidirectionalSearch::new(max_n, domain),
        }
    }

    fn index(&mut self) -> &mut ConnectivityIndex {
        let (max_n, domain) = (self.max_n, self.domain);
        self.index
            .get_or_insert_with(|| ConnectivityIndex::build(max_n, domain))
    }
}

impl PathFinder for UnionFindFinder {
    fn run_check(&mut self) -> Result<CheckOutcome, CheckError> {
        let max_n = self.max_n;
        self.index().verify_single_component()?;
        Ok(CheckOutcome::Verified { max_n })
    }

    fn get_path(&mut self, a: Value, b: Value) -> PathLookup {
        let fallback = self.fallback;
        let index = self.index();
        if index.find(a) != index.find(b) {
            return PathLookup::NotFound(NotFoundReason::SeparateClasses);
        }
        match reconstruct(index, a, b).or_else(|| fallback.find_path(a, b)) {
            Some(path) => PathLookup::Found(path),
            None => PathLookup::NotFound(NotFoundReason::NoMeetingPoint),
        }
    }

    fn classes(&mut self) -> Option<Vec<Vec<Value>>> {
        Some(self.index().classes())
    }
}

/// Bidirectional-search strategy.
#[derive(Debug)]
pub struct SearchFinder {
    search: BidirectionalSearch,
}

impl SearchFinder {
    pub fn new(max_n: Value, domain: TermDomain) -> Self {
        Self {
            search: BidirectionalSearch::new(max_n, domain),
        }
    }
}

impl PathFinder for SearchFinder {
    fn run_check(&mut self) -> Result<CheckOutcome, CheckError> {
        Ok(CheckOutcome::Deferred)
    }

    fn get_path(&mut self, a: Value, b: Value) -> PathLookup {
        match self.search.find_path(a, b) {
            Some(path) => PathLookup::Found(path),
            None => PathLookup::NotFound(NotFoundReason::NoMeetingPoint),
        }
    }
}

//─────────────────────────────────────────────────────────────────────────────

/// Checks the coloring hypothesis for a bound and answers witness queries.
pub struct Checker {
    max_n: Value,
    domain: TermDomain,
    strategy: Strategy,
    finder: Box<dyn PathFinder>,
}

impl Checker {
    /// Creates a checker over the default (natural) term domain.
    pub fn new(max_n: Value, strategy: Strategy) -> Result<Self, CheckError> {
        Self::with_domain(max_n, strategy, TermDomain::default())
    }

    /// # Errors
    /// `CheckError::InvalidBound` if `max_n` is zero.
    pub fn with_domain(
        max_n: Value,
        strategy: Strategy,
        domain: TermDomain,
    ) -> Result<Self, CheckError> {
        if max_n == 0 {
            return Err(CheckError::InvalidBound(max_n));
        }
        let finder: Box<dyn PathFinder> = match strategy {
            Strategy::UnionFind => Box::new(UnionFindFinder::new(max_n, domain)),
            Strategy::Bidirectional => Box::new(SearchFinder::new(max_n, domain)),
        };
        Ok(Self {
            max_n,
            domain,
            strategy,
            finder,
        })
    }

    pub fn max_n(&self) -> Value {
        self.max_n
    }

    pub fn domain(&self) -> TermDomain {
        self.domain
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Verifies that `[1, max_n]` forms a single class (union-find), or does
    /// nothing (bidirectional).
    ///
    /// # Errors
    /// `CheckError::Disconnected` naming the first value outside the class of 1.
    pub fn run_check(&mut self) -> Result<CheckOutcome, CheckError> {
        self.finder.run_check()
    }

    /// Finds a witness path between `a` and `b`.
    ///
    /// # Errors
    /// `CheckError::OutOfRange` if either endpoint lies outside `[1, max_n]`.
    pub fn get_path(&mut self, a: Value, b: Value) -> Result<PathLookup, CheckError> {
        self.ensure_in_range(a)?;
        self.ensure_in_range(b)?;
        Ok(self.finder.get_path(a, b))
    }

    /// The classes of `[1, max_n]` ordered by smallest member, for strategies
    /// that materialize them.
    pub fn classes(&mut self) -> Option<Vec<Vec<Value>>> {
        self.finder.classes()
    }

    fn ensure_in_range(&self, value: Value) -> Result<(), CheckError> {
        if (1..=self.max_n).contains(&value) {
            Ok(())
        } else {
            Err(CheckError::OutOfRange {
                value,
                max_n: self.max_n,
            })
        }
    }
}
