//! Size-annotated path tree built from `du` output.
//!
//! Each [`Node`] stands for one path segment. Children are created on first
//! use while a path is walked, so a line for `a/b/c` implicitly creates `a`
//! and `a/b` even if their own lines never show up.

use std::cell::OnceCell;
use std::collections::BTreeMap;

/// One path segment: an optional explicit size and named children.
///
/// A node without an explicit size takes the sum of its children as its
/// resolved size. The resolved size is computed once and cached; every
/// mutating accessor clears the cache of the node it is called on, and since
/// mutation always walks down from the root through `&mut`, the caches of
/// all ancestors on that path are cleared as well.
#[derive(Clone, Debug, Default)]
pub struct Node {
    size: Option<u64>,
    children: BTreeMap<String, Self>,
    resolved: OnceCell<u64>,
}

impl Node {
    /// Create an empty node with no size and no children.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The size given for this exact path in the input, if any.
    #[must_use]
    pub const fn size(&self) -> Option<u64> {
        self.size
    }

    /// Assign this node's explicit size.
    ///
    /// # Errors
    ///
    /// Returns the previously assigned size if one was already set; the node
    /// is left unchanged in that case.
    pub fn set_size(&mut self, size: u64) -> Result<(), u64> {
        if let Some(existing) = self.size {
            return Err(existing);
        }
        self.size = Some(size);
        self.resolved.take();
        Ok(())
    }

    /// Named children, in name order.
    #[must_use]
    pub const fn children(&self) -> &BTreeMap<String, Self> {
        &self.children
    }

    /// Look up a direct child by segment name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.get(name)
    }

    /// Get the child named `name`, creating an empty one if it is missing.
    pub fn child_mut(&mut self, name: &str) -> &mut Self {
        self.resolved.take();
        self.children.entry(name.to_string()).or_default()
    }

    /// Walk `segments` from this node, creating missing nodes on the way, and
    /// return the node at the end of the path.
    pub fn descend<'a, I>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        segments
            .into_iter()
            .fold(self, |node, segment| node.child_mut(segment))
    }

    /// The effective size of this node.
    ///
    /// This is the explicit size when one was given, even if it disagrees
    /// with the children. Otherwise it is the sum of the children's resolved
    /// sizes, which is `0` for a node without children.
    #[must_use]
    pub fn resolved_size(&self) -> u64 {
        *self.resolved.get_or_init(|| {
            self.size.unwrap_or_else(|| {
                self.children
                    .values()
                    .fold(0u64, |total, child| total.saturating_add(child.resolved_size()))
            })
        })
    }

    /// Re-key a sole top-level `.` child as `name`.
    ///
    /// `du .` reports everything under `.`; this lets the caller show a
    /// meaningful name instead. Nothing happens unless this node has exactly
    /// one child and that child is named exactly `.`. Returns whether the
    /// rename happened.
    pub fn rename_dot_child(&mut self, name: &str) -> bool {
        if self.children.len() != 1 || !self.children.contains_key(".") {
            return false;
        }
        if let Some(dot) = self.children.remove(".") {
            self.children.insert(name.to_string(), dot);
        }
        true
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.children == other.children
    }
}

impl Eq for Node {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = Node::new();

        assert_eq!(node.size(), None);
        assert!(node.children().is_empty());
        assert_eq!(node.resolved_size(), 0);
    }

    #[test]
    fn test_set_size_only_once() {
        let mut node = Node::new();

        assert_eq!(node.set_size(42), Ok(()));
        assert_eq!(node.set_size(5), Err(42));
        assert_eq!(node.size(), Some(42));
    }

    #[test]
    fn test_child_mut_creates_on_miss() {
        let mut node = Node::new();
        node.child_mut("a").set_size(1).unwrap();
        node.child_mut("a");

        assert_eq!(node.children().len(), 1);
        assert_eq!(node.child("a").and_then(Node::size), Some(1));
    }

    #[test]
    fn test_descend_builds_intermediate_nodes() {
        let mut root = Node::new();
        root.descend(["a", "b", "c"]).set_size(7).unwrap();

        let a = root.child("a").unwrap();
        let b = a.child("b").unwrap();
        let c = b.child("c").unwrap();
        assert_eq!(a.size(), None);
        assert_eq!(b.size(), None);
        assert_eq!(c.size(), Some(7));
    }

    #[test]
    fn test_resolved_size_sums_children() {
        let mut node = Node::new();
        node.child_mut("bar").set_size(2048).unwrap();
        node.child_mut("baz").set_size(1024).unwrap();

        assert_eq!(node.resolved_size(), 3072);
    }

    #[test]
    fn test_resolved_size_is_recursive() {
        let mut root = Node::new();
        root.descend(["a", "b"]).set_size(10).unwrap();
        root.descend(["a", "c", "d"]).set_size(5).unwrap();
        root.descend(["e"]).set_size(1).unwrap();

        assert_eq!(root.child("a").unwrap().resolved_size(), 15);
        assert_eq!(root.resolved_size(), 16);
    }

    #[test]
    fn test_explicit_size_wins_over_children() {
        let mut node = Node::new();
        node.set_size(42).unwrap();
        node.child_mut("a").set_size(11).unwrap();

        assert_eq!(node.resolved_size(), 42);
    }

    #[test]
    fn test_resolved_size_cache_cleared_by_mutation() {
        let mut root = Node::new();
        root.descend(["a", "b"]).set_size(10).unwrap();
        assert_eq!(root.resolved_size(), 10);

        root.descend(["a", "c"]).set_size(5).unwrap();
        assert_eq!(root.child("a").unwrap().resolved_size(), 15);
        assert_eq!(root.resolved_size(), 15);
    }

    #[test]
    fn test_resolved_size_saturates() {
        let mut root = Node::new();
        root.child_mut("a").set_size(u64::MAX).unwrap();
        root.child_mut("b").set_size(1).unwrap();

        assert_eq!(root.resolved_size(), u64::MAX);
    }

    #[test]
    fn test_rename_dot_child() {
        let mut root = Node::new();
        root.descend([".", "foo"]).set_size(42).unwrap();

        assert!(root.rename_dot_child("/var"));
        assert!(root.child(".").is_none());
        let renamed = root.child("/var").unwrap();
        assert_eq!(renamed.child("foo").and_then(Node::size), Some(42));
    }

    #[test]
    fn test_rename_dot_child_noop_for_other_names() {
        let mut root = Node::new();
        root.child_mut("foo").set_size(1).unwrap();

        assert!(!root.rename_dot_child("/var"));
        assert!(root.child("foo").is_some());
    }

    #[test]
    fn test_rename_dot_child_noop_with_siblings() {
        let mut root = Node::new();
        root.child_mut(".").set_size(1).unwrap();
        root.child_mut("other").set_size(2).unwrap();

        assert!(!root.rename_dot_child("/var"));
        assert!(root.child(".").is_some());
    }

    #[test]
    fn test_rename_dot_child_ignores_nested_dots() {
        let mut root = Node::new();
        root.descend(["top", "."]).set_size(3).unwrap();

        assert!(!root.rename_dot_child("/var"));
        assert!(root.child("top").unwrap().child(".").is_some());
    }

    #[test]
    fn test_equality_ignores_cache() {
        let mut a = Node::new();
        a.child_mut("x").set_size(1).unwrap();
        let mut b = Node::new();
        b.child_mut("x").set_size(1).unwrap();

        let _ = a.resolved_size();
        assert_eq!(a, b);
    }
}
