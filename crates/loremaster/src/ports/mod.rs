//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer interacts with
//! external systems. Implementations live in adapter crates.

pub mod services;

// Re-exports
pub use services::*;
