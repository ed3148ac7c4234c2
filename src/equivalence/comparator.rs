//! The equivalence comparator contract.
//!
//! A comparator answers two questions about elements that live inside some
//! surrounding context: are these two elements interchangeable, and which
//! hash bucket does an element belong to. Upstream partitioning relies on
//! the hash to bucket elements cheaply and on `equivalent` to split buckets
//! that collide.

use std::convert::Infallible;

/// A context-aware equivalence relation with a compatible hash.
///
/// Implementations must uphold:
///
/// * `equivalent` is reflexive, symmetric and transitive for a fixed
///   context type.
/// * `equivalent(a, ca, b, cb) == Ok(true)` implies
///   `equivalence_hash(a, ca) == equivalence_hash(b, cb)`.
///
/// The converse of the hash law need not hold. Callers must tolerate two
/// non-equivalent elements sharing a hash.
///
/// The contract itself never fails; `Error` belongs to the implementation
/// (use [`Infallible`] when there is nothing to report).
///
/// # Example
///
/// ```rust
/// use isoprune::equivalence::EquivalenceComparator;
/// use std::convert::Infallible;
///
/// /// Strings are equivalent when they have the same length.
/// struct SameLength;
///
/// impl EquivalenceComparator<str, ()> for SameLength {
///     type Error = Infallible;
///
///     fn equivalent(&self, a: &str, _: &(), b: &str, _: &()) -> Result<bool, Infallible> {
///         Ok(a.len() == b.len())
///     }
///
///     fn equivalence_hash(&self, a: &str, _: &()) -> Result<u64, Infallible> {
///         Ok(a.len() as u64)
///     }
/// }
///
/// assert_eq!(SameLength.equivalent("abc", &(), "xyz", &()), Ok(true));
/// ```
pub trait EquivalenceComparator<E: ?Sized, C: ?Sized> {
    /// Failure raised while inspecting an element in its context.
    type Error;

    /// Returns true iff `a` (in `context_a`) and `b` (in `context_b`) are
    /// interchangeable under this relation.
    fn equivalent(
        &self,
        a: &E,
        context_a: &C,
        b: &E,
        context_b: &C,
    ) -> Result<bool, Self::Error>;

    /// Hash of `element` consistent with [`equivalent`](Self::equivalent).
    fn equivalence_hash(&self, element: &E, context: &C) -> Result<u64, Self::Error>;
}

impl<E: ?Sized, C: ?Sized, Q: EquivalenceComparator<E, C> + ?Sized> EquivalenceComparator<E, C>
    for &Q
{
    type Error = Q::Error;

    fn equivalent(
        &self,
        a: &E,
        context_a: &C,
        b: &E,
        context_b: &C,
    ) -> Result<bool, Self::Error> {
        (**self).equivalent(a, context_a, b, context_b)
    }

    fn equivalence_hash(&self, element: &E, context: &C) -> Result<u64, Self::Error> {
        (**self).equivalence_hash(element, context)
    }
}

/// Comparator under which every element is equivalent to every other.
///
/// Useful where a search needs a comparator but no pruning is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformEquivalenceComparator;

impl UniformEquivalenceComparator {
    /// Creates a new uniform comparator.
    pub fn new() -> Self {
        Self
    }
}

impl<E: ?Sized, C: ?Sized> EquivalenceComparator<E, C> for UniformEquivalenceComparator {
    type Error = Infallible;

    fn equivalent(&self, _: &E, _: &C, _: &E, _: &C) -> Result<bool, Infallible> {
        Ok(true)
    }

    fn equivalence_hash(&self, _: &E, _: &C) -> Result<u64, Infallible> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Parity;

    impl EquivalenceComparator<u32, ()> for Parity {
        type Error = Infallible;

        fn equivalent(&self, a: &u32, _: &(), b: &u32, _: &()) -> Result<bool, Infallible> {
            Ok(a % 2 == b % 2)
        }

        fn equivalence_hash(&self, a: &u32, _: &()) -> Result<u64, Infallible> {
            Ok(u64::from(a % 2))
        }
    }

    #[test]
    fn test_uniform_everything_equivalent() {
        let cmp = UniformEquivalenceComparator::new();
        assert_eq!(cmp.equivalent(&1, &"g1", &99, &"g2"), Ok(true));
        assert_eq!(cmp.equivalent("a", &(), "zzz", &()), Ok(true));
    }

    #[test]
    fn test_uniform_constant_hash() {
        let cmp = UniformEquivalenceComparator;
        assert_eq!(
            EquivalenceComparator::<i32, ()>::equivalence_hash(&cmp, &7, &()),
            Ok(0)
        );
        assert_eq!(
            EquivalenceComparator::<i32, ()>::equivalence_hash(&cmp, &-3, &()),
            Ok(0)
        );
    }

    #[test]
    fn test_custom_comparator_hash_law() {
        let cmp = Parity;
        for a in 0..10u32 {
            for b in 0..10u32 {
                if cmp.equivalent(&a, &(), &b, &()).unwrap() {
                    assert_eq!(
                        cmp.equivalence_hash(&a, &()),
                        cmp.equivalence_hash(&b, &())
                    );
                }
            }
        }
    }

    #[test]
    fn test_reference_forwards() {
        fn same_class<Q: EquivalenceComparator<u32, ()>>(cmp: Q, a: u32, b: u32) -> bool {
            matches!(cmp.equivalent(&a, &(), &b, &()), Ok(true))
        }

        let cmp = Parity;
        assert!(same_class(&cmp, 2, 4));
        assert!(!same_class(&cmp, 2, 5));
        assert!(same_class(&&cmp, 1, 3));
    }
}
