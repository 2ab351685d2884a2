//! Treemap JSON structure.
//!
//! This module turns a parsed [`Node`] tree into the nested records consumed
//! by the webtreemap renderer:
//!
//! ```json
//! {"name": "foo 42.0 KiB", "data": {"$area": 42}, "children": []}
//! ```
//!
//! Fields are serialized in declaration order (`name`, `data`, `children`),
//! which keeps the output stable between runs.

use serde::{Deserialize, Serialize};

use crate::parser::SEPARATOR;
use crate::tree::Node;
use crate::utils::format_size;

/// Label prefix for the synthetic node wrapping several top-level paths.
pub const TOTAL_LABEL: &str = "total disk usage";

/// One rectangle in the treemap.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TreemapNode {
    /// Display name, followed by a size label when the size came from the input.
    pub name: String,

    /// Layout data read by the renderer.
    pub data: TreemapData,

    /// Children, largest first.
    pub children: Vec<Self>,
}

/// Layout data attached to every [`TreemapNode`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreemapData {
    /// Resolved size, used by the renderer as the rectangle's area.
    #[serde(rename = "$area")]
    pub area: u64,
}

impl TreemapNode {
    /// Serialize `node` and its subtree under the display name `name`.
    ///
    /// Children are ordered by resolved size, largest first, with ties
    /// broken by ascending name. A child with an empty segment name (the
    /// root of an absolute path) is shown as `/`.
    #[must_use]
    pub fn from_node(node: &Node, name: &str) -> Self {
        let name = match node.size() {
            Some(size) => format!("{name} {}", format_size(size)),
            None => name.to_string(),
        };

        let mut children: Vec<(&String, &Node)> = node.children().iter().collect();
        children.sort_by(|(a_name, a), (b_name, b)| {
            b.resolved_size()
                .cmp(&a.resolved_size())
                .then_with(|| a_name.cmp(b_name))
        });

        Self {
            name,
            data: TreemapData {
                area: node.resolved_size(),
            },
            children: children
                .into_iter()
                .map(|(child_name, child)| Self::from_node(child, &display_name(child_name)))
                .collect(),
        }
    }
}

/// The name shown for a path segment.
#[must_use]
pub fn display_name(segment: &str) -> String {
    if segment.is_empty() {
        SEPARATOR.to_string()
    } else {
        segment.to_string()
    }
}

/// Build the document for a whole parsed tree.
///
/// When `dot_name` is given and the only top-level entry is `.`, that entry
/// is shown as `dot_name` instead. A single top-level entry becomes the
/// document root. Several top-level entries are wrapped in a synthetic node
/// named after their combined size.
#[must_use]
pub fn build_document(mut root: Node, dot_name: Option<&str>) -> TreemapNode {
    if let Some(dot_name) = dot_name {
        root.rename_dot_child(dot_name);
    }

    if root.children().len() == 1
        && let Some((name, child)) = root.children().iter().next()
    {
        return TreemapNode::from_node(child, &display_name(name));
    }

    let total = format!("{TOTAL_LABEL} {}", format_size(root.resolved_size()));
    TreemapNode::from_node(&root, &total)
}
