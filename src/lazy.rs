use std::collections::BTreeSet;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::combinatorics::permutation_count;
use crate::unrank::{IndexMappingError, check_bounds};

/// Map `index` to a k-permutation of the identities `0..n`, resolving each
/// chosen identity to a value only when it is selected.
///
/// Produces exactly the selection [`crate::unrank::unrank_dense`] would
/// produce over a materialized `resolve(0), …, resolve(n-1)` slice, but
/// calls `resolve` only `k` times. Worth it whenever elements are expensive
/// to produce (disk, network, generated content) and `k` is far smaller
/// than `n`.
///
/// The working set is kept in ascending identity order; the engine pays an
/// ordered walk per position (up to the size of the surviving set) instead
/// of the dense engine's direct offset removal. An unordered hash set would
/// not do here: its iteration order is unspecified, and the lexicographic
/// ordering contract depends on counting survivors in ascending order.
pub fn unrank_lazy<T, F>(
    n: usize,
    k: usize,
    index: &BigUint,
    mut resolve: F,
) -> Result<Vec<T>, IndexMappingError>
where
    F: FnMut(usize) -> T,
{
    check_bounds(n, k, index)?;

    let mut index = index.clone();
    let mut working: BTreeSet<usize> = (0..n).collect();
    let mut result = Vec::with_capacity(k);

    for slot in 0..k {
        let block = permutation_count(n - slot - 1, k - slot - 1);
        let quotient = &index / &block;
        index %= &block;

        let identity = quotient
            .to_usize()
            .and_then(|position| working.iter().nth(position).copied())
            .ok_or_else(|| IndexMappingError::MissingCandidate {
                position: quotient.clone(),
                remaining: working.len(),
            })?;
        working.remove(&identity);
        result.push(resolve(identity));
    }

    Ok(result)
}
