//! Domain layer - Core deployment logic and models.
//!
//! Pure logic only: router list parsing and validation. No external
//! dependencies here (hexagonal architecture inner ring); everything is
//! testable in isolation.

pub mod routers;

// Re-export core functions for convenience
pub use routers::{RouterListError, parse_routers, split_routers};
