//! Path tree built from `du` output.
//!
//! ## Main Parts
//!
//! - [`Node`] - One path segment with an optional explicit size and its children

pub mod node;

pub use node::Node;
