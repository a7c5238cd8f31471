// checker façade and strategies
mod checker;
// error module
mod error;
// union-find index
mod index;
// witness-forest path reconstruction
mod reconstruct;
// bidirectional search
mod search;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use checker::{CheckOutcome, Checker, NotFoundReason, PathLookup, Strategy};
pub use error::CheckError;
