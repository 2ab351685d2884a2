//! Parser for `du` output.
//!
//! Input is a sequence of lines, each holding a numeric size, whitespace and
//! a path:
//!
//! ```text
//! 11      ./foo/a
//! 42      ./foo
//! 17      ./bar
//! 63      .
//! ```
//!
//! The unit does not matter as long as every line uses the same one. `du`
//! lists children before their parents, but the parser does not rely on it.

use tracing::debug;

use crate::error::ParseError;
use crate::tree::Node;

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Most segments a path may have. Deeper paths are rejected so building,
/// sizing and serializing the tree cannot exhaust the stack.
pub const MAX_DEPTH: usize = 2048;

/// A single parsed `<size> <path>` record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry<'a> {
    /// Size in the report's unit.
    pub size: u64,

    /// Path with trailing whitespace and separators removed.
    pub path: &'a str,
}

impl<'a> Entry<'a> {
    /// Split a raw line into its size and path.
    ///
    /// # Errors
    ///
    /// - [`ParseError::Format`] when the line has no path after the size
    /// - [`ParseError::InvalidSize`] when the size is not a non-negative integer
    /// - [`ParseError::TooDeep`] when the path has more than [`MAX_DEPTH`] segments
    pub fn parse(line: &'a str, line_number: usize) -> Result<Self, ParseError> {
        let format_error = || ParseError::Format {
            line: line_number,
            content: line.trim_end_matches(['\n', '\r']).to_string(),
        };

        let (size_token, rest) = line
            .trim_start()
            .split_once(char::is_whitespace)
            .ok_or_else(format_error)?;

        let rest = rest.trim_start();
        if rest.trim_end().is_empty() {
            return Err(format_error());
        }

        let size = size_token
            .parse::<u64>()
            .map_err(|_| ParseError::InvalidSize {
                line: line_number,
                token: size_token.to_string(),
            })?;

        let path = rest.trim_end_matches(|c: char| c.is_whitespace() || c == SEPARATOR);

        let depth = path.matches(SEPARATOR).count() + 1;
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep {
                line: line_number,
                depth,
            });
        }

        Ok(Self { size, path })
    }

    /// The path split into segments.
    ///
    /// Empty segments (from a leading `/`, or a path that was only `/`) and
    /// `.` are kept as ordinary names.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.path.split(SEPARATOR)
    }
}

/// Build a path tree from `du` output lines.
///
/// Each line's size is stored on the node for its path; nodes along the way
/// are created as needed. Directory sizes that are not listed are resolved
/// from their children later, see [`Node::resolved_size`].
///
/// # Errors
///
/// Stops at the first bad line:
/// - [`ParseError::Format`] / [`ParseError::InvalidSize`] for malformed lines
/// - [`ParseError::TooDeep`] for paths nested past [`MAX_DEPTH`]
/// - [`ParseError::DuplicateEntry`] when a path's size is given twice
///
/// # Examples
///
/// ```
/// # use du2treemap::parser::parse_du;
/// let root = parse_du(["11 ./foo/a\n", "42 ./foo\n", "63 .\n"])?;
/// assert_eq!(root.resolved_size(), 63);
/// # Ok::<(), du2treemap::ParseError>(())
/// ```
pub fn parse_du<I>(lines: I) -> Result<Node, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut root = Node::new();
    let mut entries = 0usize;

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let line = line.as_ref();

        let entry = Entry::parse(line, line_number).inspect_err(|err| {
            debug!("rejected input line {line_number}: {err}");
        })?;

        root.descend(entry.segments())
            .set_size(entry.size)
            .map_err(|_| ParseError::DuplicateEntry {
                line: line_number,
                path: entry.path.to_string(),
            })?;

        entries += 1;
    }

    debug!("parsed {entries} du entries");
    Ok(root)
}
