//! # Single-Elimination Bracket Modeling
//!
//! This library models knockout tournaments the way bracket pages print
//! them: a perfect binary tree whose leaves are the first-round slots, plus
//! the seeding order that decides which slot each ranked entrant occupies.
//!
//! ## Core Pieces
//!
//! 1. **Bracket trees**: perfect binary trees of fixed height with parent
//!    back-links, arena-allocated and addressed by id
//! 2. **Seeding**: the bottom-up group sort that turns a ranked field into
//!    the canonical 1v16, 8v9, 4v13, 5v12... slot order
//! 3. **Draw records**: teams, games and rounds as scraped, validated and
//!    poured into a tree level by level
//!
//! ## Usage Example
//!
//! ```
//! use seedtree::{seeding, BinaryTree};
//!
//! // Rank the field, then lay it out in bracket order: 1 meets 8, 4 meets 5...
//! let order = seeding::sort((1u32..=8).collect::<Vec<_>>())?;
//! assert_eq!(order, vec![1, 8, 4, 5, 2, 7, 3, 6]);
//!
//! // A height-3 tree models the same eight-entrant bracket.
//! let mut tree = BinaryTree::new(3)?;
//! let leaves = tree.levels(tree.root())[&3].clone();
//! for (id, seed) in leaves.into_iter().zip(order) {
//!     tree[id].set_data(seed);
//! }
//! # Ok::<(), seedtree::BracketError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod bracket; // Teams, games, rounds and tree assembly
pub mod seeding; // Bracket-order layout of a ranked field
pub mod tree; // Perfect binary trees with parent links

pub use bracket::{Bracket, Game, Round, Team, Tournament};
pub use tree::{BinaryTree, Node, NodeId, Traversal};

use thiserror::Error;

/// Errors reported by bracket construction and seeding.
///
/// Every variant is a precondition violation, raised at the point of
/// detection; nothing is retried or repaired internally.
#[derive(Error, Debug)]
pub enum BracketError {
    /// Requested tree height above [`tree::MAX_HEIGHT`].
    #[error("bracket height {height} exceeds the supported maximum {max}")]
    HeightTooLarge {
        /// Height that was requested.
        height: u32,
        /// Largest supported height.
        max: u32,
    },

    /// Seeding was asked to lay out an empty field.
    #[error("field of entrants is empty")]
    EmptyField,

    /// The field size fits no bracket shape.
    #[error("field of {0} entrants is not a power of two")]
    FieldNotPowerOfTwo(usize),

    /// A bracket without rounds has no tree.
    #[error("bracket has no rounds")]
    EmptyBracket,

    /// A round's game count does not fit its place in the draw.
    #[error("round {round} has {found} games, expected {expected}")]
    RoundSizeMismatch {
        /// 1-based round number, counted from the first round.
        round: usize,
        /// Games the bracket shape requires at this round.
        expected: usize,
        /// Games actually present.
        found: usize,
    },
}
