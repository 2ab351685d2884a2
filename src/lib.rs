//! # du2treemap
//!
//! Convert `du` disk usage reports into data for the
//! [webtreemap](https://github.com/martine/webtreemap) treemap viewer.
//!
//! The pipeline has two pure stages:
//!
//! 1. [`parser::parse_du`] reads `<size> <path>` lines into a [`tree::Node`]
//!    tree, rejecting malformed lines and paths listed twice.
//! 2. [`treemap::build_document`] turns the tree into nested
//!    [`treemap::TreemapNode`] records with resolved sizes, size labels and
//!    largest-first child order.
//!
//! [`output::render`] then wraps the JSON in a `var tree = ...;` statement or
//! a standalone HTML page.

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod parser;
pub mod tree;
pub mod treemap;
pub mod utils;

pub use error::{ParseError, ParseErrorKind};
pub use output::{OutputFormat, RenderOptions};
pub use tree::Node;
pub use treemap::{TreemapNode, build_document};

/// Run the whole pipeline over `lines`: parse, build the document, render it.
///
/// # Errors
///
/// Returns the [`ParseError`] for the first bad line, or a serialization error.
pub fn convert<I>(
    lines: I,
    dot_name: Option<&str>,
    options: &RenderOptions,
) -> anyhow::Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let root = parser::parse_du(lines)?;
    let document = build_document(root, dot_name);
    Ok(output::render(&document, options)?)
}
