//! Depth-first walks over bracket trees
//!
//! Classic recursive descent in the three textbook orders. Sequences are
//! recomputed on every call; nothing is cached between walks.

use std::collections::BTreeMap;

use super::{BinaryTree, NodeId};

/// Depth-first visit order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Visit a node before either subtree.
    Pre,
    /// Visit a node between its subtrees.
    #[default]
    In,
    /// Visit a node after both subtrees.
    Post,
}

/// Collect the subtree under `start` in the requested order.
pub(super) fn collect<T>(tree: &BinaryTree<T>, start: NodeId, order: Traversal) -> Vec<NodeId> {
    let mut out = Vec::new();
    walk(tree, Some(start), order, &mut out);
    out
}

fn walk<T>(tree: &BinaryTree<T>, node: Option<NodeId>, order: Traversal, out: &mut Vec<NodeId>) {
    let Some(id) = node else { return };

    if order == Traversal::Pre {
        out.push(id);
    }
    walk(tree, tree.node(id).left(), order, out);
    if order == Traversal::In {
        out.push(id);
    }
    walk(tree, tree.node(id).right(), order, out);
    if order == Traversal::Post {
        out.push(id);
    }
}

/// Group the subtree under `start` by depth, with `start` itself at depth 0.
///
/// Each level lists its nodes left to right.
pub(super) fn by_depth<T>(tree: &BinaryTree<T>, start: NodeId) -> BTreeMap<u32, Vec<NodeId>> {
    let mut levels = BTreeMap::new();
    descend(tree, Some(start), 0, &mut levels);
    levels
}

fn descend<T>(
    tree: &BinaryTree<T>,
    node: Option<NodeId>,
    depth: u32,
    levels: &mut BTreeMap<u32, Vec<NodeId>>,
) {
    let Some(id) = node else { return };

    levels.entry(depth).or_default().push(id);
    descend(tree, tree.node(id).left(), depth + 1, levels);
    descend(tree, tree.node(id).right(), depth + 1, levels);
}
