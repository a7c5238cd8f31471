// edge enumeration
mod edges;
// error module
mod error;
// step and path model
mod step;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use edges::{EdgeGenerator, TermDomain};
pub use error::PathViolation;
pub use step::{NumbersPath, Step, Value};
