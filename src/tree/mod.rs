//! Perfect binary bracket trees
//!
//! A tree of height `h` models a single-elimination bracket for `2^h`
//! entrants: leaves are first-round slots, each internal node is the slot
//! the winner of its two children advances into, and the root holds the
//! champion. The shape is fixed at construction; payloads are assigned
//! afterwards, level by level, as results become known.
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`], which keeps
//! parent back-links cheap and makes a deep copy an ordinary `clone()`.

mod node;
mod traversal;

pub use node::{Node, NodeId};
pub use traversal::Traversal;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::debug;

use crate::BracketError;

/// Largest supported tree height.
///
/// A tree of height `h` allocates `2^(h+1) - 1` nodes, so the cap keeps the
/// arena addressable everywhere; real brackets stop around height 6.
pub const MAX_HEIGHT: u32 = 30;

/// A perfect binary tree of fixed height with parent-linked arena nodes.
///
/// Every internal node has exactly two children and all leaves share the
/// same depth. Only payloads can change after construction.
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<Node<T>>,
    root: NodeId,
    height: u32,
}

impl<T> BinaryTree<T> {
    /// Build the perfect tree of the given height with every node vacant.
    ///
    /// # Errors
    ///
    /// [`BracketError::HeightTooLarge`] above [`MAX_HEIGHT`].
    pub fn new(height: u32) -> Result<Self, BracketError> {
        if height > MAX_HEIGHT {
            return Err(BracketError::HeightTooLarge {
                height,
                max: MAX_HEIGHT,
            });
        }

        let total = (1usize << (height + 1)) - 1;
        let mut nodes: Vec<Node<T>> = Vec::with_capacity(total);
        nodes.push(Node::vacant(None));

        // Level-order allocation: children of arena slot i land at 2i+1 and
        // 2i+2, so exactly the first 2^height - 1 slots become internal.
        for parent in 0..total / 2 {
            let left = NodeId(nodes.len());
            nodes.push(Node::vacant(Some(NodeId(parent))));
            let right = NodeId(nodes.len());
            nodes.push(Node::vacant(Some(NodeId(parent))));
            nodes[parent].set_children(left, right);
        }
        debug_assert_eq!(nodes.len(), total);

        debug!(height, nodes = nodes.len(), "built bracket tree");

        Ok(Self {
            nodes,
            root: NodeId(0),
            height,
        })
    }

    /// Root node id.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Edges from the root down to any leaf.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Leaf count: `2^height`.
    #[inline]
    pub fn size(&self) -> usize {
        1 << self.height
    }

    /// Total node count: `2^(height+1) - 1`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Borrow a node.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    /// Mutably borrow a node, usually to assign its payload.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }

    /// Depth-first node sequence of the subtree under `start`.
    ///
    /// Starting from the root, every node appears exactly once. The walk is
    /// recomputed on each call.
    pub fn traverse(&self, start: NodeId, order: Traversal) -> Vec<NodeId> {
        traversal::collect(self, start, order)
    }

    /// Nodes of the subtree under `start`, grouped by depth below it.
    ///
    /// Depth 0 holds `start` itself; every level lists its nodes left to
    /// right. From the root this yields `height + 1` levels of widths
    /// `1, 2, 4, ...`.
    pub fn levels(&self, start: NodeId) -> BTreeMap<u32, Vec<NodeId>> {
        traversal::by_depth(self, start)
    }

    fn depth_of(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.node(current).parent() {
            current = parent;
            depth += 1;
        }
        depth
    }
}

impl<T> Index<NodeId> for BinaryTree<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        self.node(id)
    }
}

impl<T> IndexMut<NodeId> for BinaryTree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.node_mut(id)
    }
}

impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    /// In-order listing, one node per line, indented by depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.traverse(self.root, Traversal::In) {
            let indent = self.depth_of(id) * 2;
            writeln!(f, "{:indent$}{}", "", self.node(id))?;
        }
        Ok(())
    }
}
