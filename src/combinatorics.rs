use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Number of k-permutations of `n` items, `P(n,k) = n·(n-1)·…·(n-k+1)`.
///
/// Returns `0` when `k > n` (no partial permutations exist) and `1` when
/// `k == 0` (the empty selection). The product is accumulated with exact
/// big-integer multiplication; `n` in the low thousands with `k` in the
/// tens yields counts far past 10^40, which is why no fixed-width integer
/// appears anywhere in the computation.
pub fn permutation_count(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let mut result = BigUint::one();
    for i in 0..k {
        result *= BigUint::from(n - i);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::permutation_count;
    use num_bigint::BigUint;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    fn factorial(n: usize) -> BigUint {
        (1..=n).fold(BigUint::one(), |acc, i| acc * BigUint::from(i))
    }

    #[test]
    fn small_values() {
        assert_eq!(permutation_count(4, 2), BigUint::from(12u32));
        assert_eq!(permutation_count(5, 5), BigUint::from(120u32));
        assert_eq!(permutation_count(6, 4), BigUint::from(360u32));
        assert_eq!(permutation_count(0, 0), BigUint::one());
    }

    #[test]
    fn degenerate_arities() {
        assert_eq!(permutation_count(3, 4), BigUint::zero());
        assert_eq!(permutation_count(0, 1), BigUint::zero());
        for n in 0..10 {
            assert_eq!(permutation_count(n, 0), BigUint::one());
        }
    }

    #[test]
    fn exceeds_native_width() {
        // P(1000, 10) is a 30-digit number; u64 tops out at 20 digits.
        let count = permutation_count(1000, 10);
        assert_eq!(count.to_string().len(), 30);
        assert!(count > BigUint::from(u64::MAX));

        let wide = permutation_count(2048, 24);
        assert!(wide.to_string().len() > 40);
        assert!(wide > BigUint::from(u128::MAX));
    }

    proptest! {
        #[test]
        fn matches_factorial_quotient(n in 0usize..=20, k in 0usize..=20) {
            let expected = if k > n {
                BigUint::zero()
            } else {
                factorial(n) / factorial(n - k)
            };
            prop_assert_eq!(permutation_count(n, k), expected);
        }
    }
}
