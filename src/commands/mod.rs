//! Command implementations

pub mod hints;
pub mod simple;
pub mod vet;

pub use hints::{HintsResult, find_hints};
pub use simple::run_simple;
pub use vet::{RootReport, VetReport, vet_roots};
