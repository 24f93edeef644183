//! Data structures for the directory summary tree.
//!
//! This module defines the core tree used throughout the `dirage`
//! application: a flat arena of [`Node`] records addressed by [`NodeId`]
//! indices. Parent/child edges mirror path containment, and the parent
//! back-reference is used only to locate insertion points during
//! construction, never during collapsing or printing.

use anyhow::{Result, bail};
use std::path::PathBuf;

/// Index of a node within a [`Tree`] arena.
pub type NodeId = usize;

/// Represents one scanned directory.
///
/// # Fields
/// * `name` - Path relative to the scan root; the root node uses the empty
///   path so that prefix comparisons during insertion work uniformly
/// * `age` - Days since the newest modification among the directory itself
///   and its immediate non-ignored files, clamped to the configured maximum
/// * `num_files` - Immediate non-ignored file count; collapsing also folds
///   the counts of absorbed children into this field
/// * `children` - Child nodes in insertion (walk) order, not sorted
/// * `parent` - Non-owning back-reference, set once at attach time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: PathBuf,
    pub age: u64,
    pub num_files: u64,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl Node {
    /// Creates a detached node; `children` and `parent` are filled in when
    /// the node is attached to a tree.
    pub fn new(name: PathBuf, age: u64, num_files: u64) -> Self {
        Node {
            name,
            age,
            num_files,
            children: Vec::new(),
            parent: None,
        }
    }
}

/// A directory tree stored as a flat arena with integer indices.
///
/// The root, once pushed, is always index [`Tree::ROOT`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Index of the root node of any non-empty tree.
    pub const ROOT: NodeId = 0;

    pub fn new() -> Self {
        Tree { nodes: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Pushes the first node into an empty tree and returns [`Tree::ROOT`].
    pub fn push_root(&mut self, node: Node) -> NodeId {
        debug_assert!(self.nodes.is_empty());
        self.nodes.push(node);
        Tree::ROOT
    }

    /// Attaches `node` as the last child of `parent` and returns its id.
    pub fn attach(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = self.nodes.len();
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent].children.push(id);
        id
    }

    /// Inserts `node` by walking upward from `from` (the most recently
    /// inserted node) until reaching the nearest node whose name is a proper
    /// path-prefix of the new node's name, then attaches it there.
    ///
    /// # Errors
    /// Fails if no ancestor matches. With a well-formed top-down walk this
    /// cannot happen; it indicates a broken walk-order assumption and must
    /// abort the scan rather than corrupt the tree.
    pub fn insert_from(&mut self, from: NodeId, node: Node) -> Result<NodeId> {
        let mut cursor = from;
        loop {
            let is_proper_prefix = {
                let candidate = &self.nodes[cursor];
                node.name.starts_with(&candidate.name) && node.name != candidate.name
            };
            if is_proper_prefix {
                return Ok(self.attach(cursor, node));
            }
            match self.nodes[cursor].parent {
                Some(p) => cursor = p,
                None => bail!(
                    "no ancestor found for {:?}: walk order violated",
                    node.name
                ),
            }
        }
    }
}
