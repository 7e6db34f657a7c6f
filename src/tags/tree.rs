//! The nested tag hierarchy.

use super::TagPath;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// One node of the tag tree.
///
/// `files` holds the pages attached directly at this node (the "untagged"
/// bucket of the node), `children` the named sub-tags. Both collections are
/// ordered, so iteration already yields the order the renderer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagNode {
    #[serde(rename = "untagged")]
    files: BTreeSet<String>,
    children: BTreeMap<String, TagNode>,
}

impl TagNode {
    /// Create an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `filename` directly at this node.
    ///
    /// Returns `false` if it was already there.
    pub fn insert_file(&mut self, filename: impl Into<String>) -> bool {
        self.files.insert(filename.into())
    }

    /// Attach `filename` at the node addressed by `path`, creating any missing
    /// nodes on the way down.
    pub fn attach(&mut self, path: &TagPath, filename: &str) {
        let mut node = self;
        for segment in path.segments() {
            node = node.children.entry(segment.clone()).or_default();
        }
        node.files.insert(filename.to_string());
    }

    /// Files attached directly at this node, in ascending order.
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }

    /// Named child nodes, in ascending key order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &TagNode)> {
        self.children.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Look up a direct child by key.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&TagNode> {
        self.children.get(key)
    }

    /// Follow `segments` from this node.
    #[cfg(test)]
    #[must_use]
    pub fn descend<'a, I>(&self, segments: I) -> Option<&TagNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        segments.into_iter().try_fold(self, |node, segment| node.child(segment))
    }

    /// `true` when neither this node nor any descendant holds a file or a child.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.children.is_empty()
    }

    /// Number of file links the subtree renders, counting a page once per
    /// node it is attached to.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.files.len() + self.children.values().map(TagNode::link_count).sum::<usize>()
    }

    /// Number of tag headings the subtree renders (this node excluded).
    #[must_use]
    pub fn heading_count(&self) -> usize {
        self.children.values().map(|child| 1 + child.heading_count()).sum()
    }
}
