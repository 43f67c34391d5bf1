//! Pure override evaluation (no IO).
//!
//! Input: the project dependency list, the managed dependency list, and a
//! graph collection capability. Output: conflicts + verdict + summary data.

#![forbid(unsafe_code)]

pub mod closure;
pub mod collector;
pub mod detect;

mod engine;

pub use closure::{ManagementClosure, build_closure};
pub use collector::{CollectError, Collector};
pub use detect::detect;
pub use engine::{DomainReport, evaluate};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod test_support;
