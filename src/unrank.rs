use std::fmt;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::combinatorics::permutation_count;

/// Why an index could not be mapped to a selection, or a selection back to
/// an index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexMappingError {
    /// More positions requested than the universe holds.
    ArityOutOfRange { k: usize, n: usize },
    /// The index is outside `[0, P(n,k) - 1]`.
    IndexOutOfBounds { index: BigUint, max: BigUint },
    /// A ranked selection names an element the surviving universe does not
    /// hold (foreign to the universe, or repeated in the selection).
    SelectionNotInUniverse { slot: usize },
    /// The walk over the working set ran out of candidates before reaching
    /// the computed offset. Indicates a bug in the engine itself, never a
    /// caller input problem.
    MissingCandidate { position: BigUint, remaining: usize },
}

impl fmt::Display for IndexMappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityOutOfRange { k, n } => {
                write!(f, "cannot select {k} positions from a universe of {n}")
            }
            Self::IndexOutOfBounds { index, max } => {
                write!(f, "index {index} is outside the valid range [0, {max}]")
            }
            Self::SelectionNotInUniverse { slot } => {
                write!(f, "selection element at slot {slot} is not in the remaining universe")
            }
            Self::MissingCandidate { position, remaining } => {
                write!(
                    f,
                    "internal invariant violated: no candidate at offset {position} with {remaining} remaining"
                )
            }
        }
    }
}

impl std::error::Error for IndexMappingError {}

/// Reject arities and indices that name no k-permutation.
///
/// Shared by the dense and lazy engines; runs before any working state is
/// built, so a rejected call has no observable effect.
pub(crate) fn check_bounds(n: usize, k: usize, index: &BigUint) -> Result<(), IndexMappingError> {
    if k > n {
        return Err(IndexMappingError::ArityOutOfRange { k, n });
    }
    let total = permutation_count(n, k);
    if *index >= total {
        // k <= n, so total >= 1 and the subtraction cannot underflow.
        return Err(IndexMappingError::IndexOutOfBounds {
            index: index.clone(),
            max: &total - 1u32,
        });
    }
    Ok(())
}

/// Map `index` to the k-permutation occupying it in the lexicographic order
/// induced by the slice order of `universe`.
///
/// Every index less than `permutation_count(n, k)` corresponds to a unique
/// ordered selection of `k` distinct elements, and distinct indices yield
/// distinct selections; no selection other than the requested one is ever
/// materialized. The mapping treats the index as a mixed-radix numeral:
/// position `i` consumes a digit in blocks of `P(n-i-1, k-i-1)`, the count
/// of selections reachable once this position is fixed.
///
/// The input slice is not mutated; only the `k` chosen elements are cloned.
pub fn unrank_dense<T: Clone>(
    universe: &[T],
    k: usize,
    index: &BigUint,
) -> Result<Vec<T>, IndexMappingError> {
    let n = universe.len();
    check_bounds(n, k, index)?;

    let mut index = index.clone();
    let mut working: Vec<&T> = universe.iter().collect();
    let mut result = Vec::with_capacity(k);

    for slot in 0..k {
        let block = permutation_count(n - slot - 1, k - slot - 1);
        let quotient = &index / &block;
        index %= &block;

        // index < P(remaining, slots) at entry to every iteration, so the
        // quotient always names a live offset.
        let position = quotient
            .to_usize()
            .filter(|&p| p < working.len())
            .ok_or_else(|| IndexMappingError::MissingCandidate {
                position: quotient.clone(),
                remaining: working.len(),
            })?;
        result.push(working.remove(position).clone());
    }

    debug_assert!(index.is_zero());
    Ok(result)
}

/// Inverse of [`unrank_dense`]: map an ordered selection back to its index.
///
/// `rank_dense(u, &unrank_dense(u, k, i)?)` returns `i` for every in-range
/// `i`. A selection element that is foreign to the universe, or that repeats
/// an earlier element, is reported with the slot where it appears.
pub fn rank_dense<T: PartialEq>(
    universe: &[T],
    selection: &[T],
) -> Result<BigUint, IndexMappingError> {
    let n = universe.len();
    let k = selection.len();
    if k > n {
        return Err(IndexMappingError::ArityOutOfRange { k, n });
    }

    let mut working: Vec<&T> = universe.iter().collect();
    let mut rank = BigUint::zero();

    for (slot, element) in selection.iter().enumerate() {
        let position = working
            .iter()
            .position(|candidate| *candidate == element)
            .ok_or(IndexMappingError::SelectionNotInUniverse { slot })?;
        working.remove(position);
        rank += BigUint::from(position) * permutation_count(n - slot - 1, k - slot - 1);
    }

    Ok(rank)
}
