//! Utility functions and helpers.
//!
//! This module contains helpers shared by the serializer and the binary,
//! such as size label formatting.

pub mod size;

pub use size::format_size;
