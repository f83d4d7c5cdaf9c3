//! Core domain logic for the giftlist platform.
//!
//! Pure, I/O-free building blocks shared by the other crates: common
//! identifier and timestamp types, the domain error taxonomy, input
//! validation helpers, and the deterministic suggestion-prompt assembly.

pub mod error;
pub mod suggestion;
pub mod types;
pub mod validation;
