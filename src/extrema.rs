use itertools::{Itertools, MinMaxResult};
use num_bigint::BigUint;

/// Exact minimum and maximum of a collection of big integers.
///
/// Returns `None` for an empty collection and `(x, x)` for a singleton.
/// Driver code uses this to validate the span of a batch of indices in one
/// comparison against `P(n,k)` before unranking any of them.
pub fn min_max<'a, I>(values: I) -> Option<(&'a BigUint, &'a BigUint)>
where
    I: IntoIterator<Item = &'a BigUint>,
{
    match values.into_iter().minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(value) => Some((value, value)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

#[cfg(test)]
mod tests {
    use super::min_max;
    use num_bigint::BigUint;

    #[test]
    fn empty_collection_has_no_extrema() {
        assert_eq!(min_max(std::iter::empty()), None);
    }

    #[test]
    fn singleton_is_its_own_extrema() {
        let value = BigUint::from(42u32);
        assert_eq!(min_max([&value]), Some((&value, &value)));
    }

    #[test]
    fn orders_values_past_native_width() {
        let small = BigUint::from(7u32);
        let large: BigUint = "340282366920938463463374607431768211457".parse().unwrap();
        let middle = BigUint::from(u64::MAX);
        let values = [middle.clone(), large.clone(), small.clone()];
        let (min, max) = min_max(values.iter()).unwrap();
        assert_eq!(*min, small);
        assert_eq!(*max, large);
    }
}
