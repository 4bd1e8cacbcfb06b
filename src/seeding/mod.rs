//! Bracket-order seeding
//!
//! Given a ranked field of `2^h` entrants, lay it out in the slot order of a
//! single-elimination bracket: the top entrant meets the bottom one, the two
//! middle entrants meet, and each half keeps the better entrants as far
//! apart as the shape allows. The layout is built bottom-up over `h` rounds.
//! Entrants start as singleton groups; each round selection-sorts the groups
//! under a comparator that alternates by slot parity, then concatenates
//! adjacent groups pairwise, halving the group count until one remains.

use tracing::debug;

use crate::BracketError;

/// Bracket height for a field of this size: the `h` with `2^h == field.len()`.
///
/// # Errors
///
/// [`BracketError::EmptyField`] for an empty field and
/// [`BracketError::FieldNotPowerOfTwo`] when no such `h` exists.
pub fn height<T>(field: &[T]) -> Result<u32, BracketError> {
    if field.is_empty() {
        return Err(BracketError::EmptyField);
    }
    if !field.len().is_power_of_two() {
        return Err(BracketError::FieldNotPowerOfTwo(field.len()));
    }
    Ok(field.len().trailing_zeros())
}

/// Reorder a ranked field into bracket slot order.
///
/// The returned vector holds exactly the input entrants, permuted. For the
/// ascending field `1..=8` the layout is `[1, 8, 4, 5, 2, 7, 3, 6]`: read
/// two at a time it pairs 1v8, 4v5, 2v7 and 3v6, with the top halves of the
/// draw meeting as late as possible.
///
/// # Errors
///
/// Fails like [`height`] does; no partial result is produced.
pub fn sort<T: Ord>(field: Vec<T>) -> Result<Vec<T>, BracketError> {
    let rounds = height(&field)?;
    let mut groups: Vec<Vec<T>> = field.into_iter().map(|entrant| vec![entrant]).collect();

    for round in 0..rounds {
        selection_sort(&mut groups);
        groups = merge_pairs(groups);
        debug!(round, groups = groups.len(), "paired bracket groups");
    }

    debug_assert_eq!(groups.len(), 1);
    Ok(groups.swap_remove(0))
}

/// Selection sort whose comparator alternates by slot parity: even slots
/// take the smallest remaining group, odd slots the largest. Groups compare
/// as whole sequences, first difference deciding, so after the pairwise
/// concatenation the best group is again adjacent to the worst one.
fn selection_sort<T: Ord>(groups: &mut [Vec<T>]) {
    for slot in 0..groups.len() {
        let mut chosen = slot;
        for candidate in slot + 1..groups.len() {
            let better = if slot % 2 == 0 {
                groups[candidate] < groups[chosen]
            } else {
                groups[candidate] > groups[chosen]
            };
            if better {
                chosen = candidate;
            }
        }
        groups.swap(slot, chosen);
    }
}

/// Concatenate adjacent groups two at a time.
fn merge_pairs<T>(groups: Vec<Vec<T>>) -> Vec<Vec<T>> {
    debug_assert_eq!(groups.len() % 2, 0);

    let mut merged = Vec::with_capacity(groups.len() / 2);
    let mut halves = groups.into_iter();
    while let (Some(mut upper), Some(lower)) = (halves.next(), halves.next()) {
        upper.extend(lower);
        merged.push(upper);
    }
    merged
}
