//! Exact unranking of k-permutations over arbitrarily large index spaces.
//!
//! Given a universe of `n` labeled items and an arity `k`, every ordered
//! selection of `k` distinct items occupies one slot in a factorial-number-
//! system lexicographic order. [`unrank::unrank_dense`] maps an index in
//! `[0, P(n,k))` to the selection at that slot without enumerating the
//! selections before it; [`lazy::unrank_lazy`] does the same over an
//! abstract pool of identities so that elements are only resolved when
//! chosen. All index arithmetic is exact big-integer arithmetic, since
//! `P(n,k)` exceeds any fixed-width integer for realistic `n` and `k`.

pub mod combinatorics;
pub mod extrema;
pub mod lazy;
pub mod unrank;
