//! Arena-allocated bracket tree nodes
//!
//! Nodes are addressed by [`NodeId`], an index into the owning tree's arena.
//! Downward `left`/`right` links carry ownership through the arena; `parent`
//! is a plain back-index for upward walks, so the up/down link pair never
//! forms an ownership cycle.

use std::cmp::Ordering;
use std::fmt;

/// Index of a node inside its owning [`BinaryTree`](super::BinaryTree).
///
/// Ids are only meaningful for the tree that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(super) usize);

impl NodeId {
    /// Arena slot of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One bracket slot: an optional payload plus links to its neighbours.
///
/// Equality and ordering are defined entirely by the payload; the link
/// fields never participate. A vacant node compares below any occupied one.
#[derive(Debug, Clone)]
pub struct Node<T> {
    data: Option<T>,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> Node<T> {
    /// Fresh node with no payload and no children yet.
    pub(super) fn vacant(parent: Option<NodeId>) -> Self {
        Self {
            data: None,
            parent,
            left: None,
            right: None,
        }
    }

    /// Wire both children in one step; construction-time only.
    pub(super) fn set_children(&mut self, left: NodeId, right: NodeId) {
        self.left = Some(left);
        self.right = Some(right);
    }

    /// Payload, if one has been assigned.
    #[inline]
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Mutable access to the payload.
    #[inline]
    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    /// Assign the payload, returning the previous one.
    pub fn set_data(&mut self, value: T) -> Option<T> {
        self.data.replace(value)
    }

    /// Remove and return the payload, leaving the node vacant.
    pub fn take_data(&mut self) -> Option<T> {
        self.data.take()
    }

    /// Whether a payload has been assigned.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.data.is_some()
    }

    /// Parent back-link (`None` only for the root).
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Left child (`None` only for leaves).
    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child (`None` only for leaves).
    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Whether this node sits on the bottom level.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: PartialOrd> PartialOrd for Node<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.data.partial_cmp(&other.data)
    }
}

impl<T: Ord> Ord for Node<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.data.cmp(&other.data)
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => data.fmt(f),
            None => f.write_str("-"),
        }
    }
}
