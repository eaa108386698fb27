//! Testing utilities and mock implementations
//!
//! Mock tools for exercising the pipeline shell without the real heuristic.

pub mod mocks;

pub use mocks::*;
