//! Partitioning elements into equivalence sets.
//!
//! Elements are first bucketed by their equivalence hash, then each bucket
//! is split by explicit `equivalent` checks against set representatives.
//! Hash collisions between non-equivalent elements therefore only cost an
//! extra comparison; they never merge sets.

use std::collections::BTreeMap;

use super::EquivalenceComparator;

/// A non-empty group of mutually equivalent elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceSet<E> {
    hash: u64,
    members: Vec<E>,
}

impl<E> EquivalenceSet<E> {
    fn new(hash: u64, first: E) -> Self {
        Self {
            hash,
            members: vec![first],
        }
    }

    /// The first member added; stands in for the whole set in comparisons.
    pub fn representative(&self) -> &E {
        &self.members[0]
    }

    /// All members in insertion order.
    pub fn members(&self) -> &[E] {
        &self.members
    }

    /// Consumes the set and returns its members.
    pub fn into_members(self) -> Vec<E> {
        self.members
    }

    /// The equivalence hash shared by every member.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false for sets produced by [`create_equivalence_sets`].
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Checks whether `element` is a member of this set.
    pub fn contains(&self, element: &E) -> bool
    where
        E: PartialEq,
    {
        self.members.contains(element)
    }
}

/// Splits `elements`, all evaluated against `context`, into equivalence sets.
///
/// Every element ends up in exactly one set. Sets are ordered by size
/// (smallest first), then by hash; ties keep first-seen order, so the
/// output is deterministic for a given input order.
///
/// # Errors
///
/// Returns the comparator's error for the first element it fails on.
///
/// # Example
///
/// ```rust
/// use isoprune::equivalence::{create_equivalence_sets, EquivalenceComparator};
/// use std::convert::Infallible;
///
/// struct ModThree;
///
/// impl EquivalenceComparator<u32, ()> for ModThree {
///     type Error = Infallible;
///     fn equivalent(&self, a: &u32, _: &(), b: &u32, _: &()) -> Result<bool, Infallible> {
///         Ok(a % 3 == b % 3)
///     }
///     fn equivalence_hash(&self, a: &u32, _: &()) -> Result<u64, Infallible> {
///         Ok(u64::from(a % 3))
///     }
/// }
///
/// let sets = create_equivalence_sets(0..7u32, &(), &ModThree).unwrap();
/// assert_eq!(sets.len(), 3);
/// assert_eq!(sets[2].members(), &[0, 3, 6]);
/// ```
pub fn create_equivalence_sets<E, C, Q, I>(
    elements: I,
    context: &C,
    comparator: &Q,
) -> Result<Vec<EquivalenceSet<E>>, Q::Error>
where
    C: ?Sized,
    Q: EquivalenceComparator<E, C> + ?Sized,
    I: IntoIterator<Item = E>,
{
    let mut buckets: BTreeMap<u64, Vec<EquivalenceSet<E>>> = BTreeMap::new();
    let mut element_count = 0usize;

    for element in elements {
        element_count += 1;
        let hash = comparator.equivalence_hash(&element, context)?;
        let bucket = buckets.entry(hash).or_default();

        let mut target = None;
        for (i, set) in bucket.iter().enumerate() {
            if comparator.equivalent(set.representative(), context, &element, context)? {
                target = Some(i);
                break;
            }
        }

        match target {
            Some(i) => bucket[i].members.push(element),
            None => {
                if !bucket.is_empty() {
                    log::trace!("equivalence hash collision on {hash:#x}");
                }
                bucket.push(EquivalenceSet::new(hash, element));
            }
        }
    }

    let mut sets: Vec<EquivalenceSet<E>> = buckets.into_values().flatten().collect();
    // Stable: equal (len, hash) keys keep bucket insertion order.
    sets.sort_by_key(|set| (set.len(), set.hash));

    log::debug!(
        "partitioned {} elements into {} equivalence sets",
        element_count,
        sets.len()
    );

    Ok(sets)
}

/// Two equivalence sets, one from each side, whose members are equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetPair {
    /// Index into the left partition
    pub left: usize,
    /// Index into the right partition
    pub right: usize,
    /// Size of the left set
    pub left_len: usize,
    /// Size of the right set
    pub right_len: usize,
}

impl SetPair {
    /// True when both sides hold the same number of elements.
    pub fn is_balanced(&self) -> bool {
        self.left_len == self.right_len
    }
}

/// Outcome of matching the equivalence sets of two contexts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetPairing {
    /// Matched set pairs, in left-partition order
    pub pairs: Vec<SetPair>,
    /// Left sets with no equivalent right set
    pub unmatched_left: Vec<usize>,
    /// Right sets with no equivalent left set
    pub unmatched_right: Vec<usize>,
}

impl SetPairing {
    /// Returns true when a bijection respecting the relation may still exist.
    ///
    /// That requires every set to be matched and every matched pair to be
    /// the same size. A `false` result proves no such bijection exists.
    pub fn is_compatible(&self) -> bool {
        self.unmatched_left.is_empty()
            && self.unmatched_right.is_empty()
            && self.pairs.iter().all(SetPair::is_balanced)
    }

    /// The right set that members of left set `left` may map into.
    pub fn candidates_for(&self, left: usize) -> Option<usize> {
        self.pairs
            .iter()
            .find(|pair| pair.left == left)
            .map(|pair| pair.right)
    }

    /// Pairs whose two sides differ in size.
    pub fn size_mismatches(&self) -> Vec<SetPair> {
        self.pairs
            .iter()
            .filter(|pair| !pair.is_balanced())
            .copied()
            .collect()
    }
}

/// Matches the sets of two partitions against each other.
///
/// Sets within one partition are pairwise non-equivalent, so each left set
/// matches at most one right set and a greedy scan is exact.
pub fn match_equivalence_sets<E, C, Q>(
    left: &[EquivalenceSet<E>],
    left_context: &C,
    right: &[EquivalenceSet<E>],
    right_context: &C,
    comparator: &Q,
) -> Result<SetPairing, Q::Error>
where
    C: ?Sized,
    Q: EquivalenceComparator<E, C> + ?Sized,
{
    let mut used = vec![false; right.len()];
    let mut pairing = SetPairing::default();

    for (li, left_set) in left.iter().enumerate() {
        let mut found = None;
        for (ri, right_set) in right.iter().enumerate() {
            if used[ri] || right_set.hash != left_set.hash {
                continue;
            }
            if comparator.equivalent(
                left_set.representative(),
                left_context,
                right_set.representative(),
                right_context,
            )? {
                found = Some(ri);
                break;
            }
        }

        match found {
            Some(ri) => {
                used[ri] = true;
                pairing.pairs.push(SetPair {
                    left: li,
                    right: ri,
                    left_len: left_set.len(),
                    right_len: right[ri].len(),
                });
            }
            None => pairing.unmatched_left.push(li),
        }
    }

    pairing.unmatched_right = used
        .iter()
        .enumerate()
        .filter(|(_, used)| !**used)
        .map(|(i, _)| i)
        .collect();

    log::debug!(
        "matched {} set pairs ({} unmatched left, {} unmatched right)",
        pairing.pairs.len(),
        pairing.unmatched_left.len(),
        pairing.unmatched_right.len()
    );

    Ok(pairing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equivalence::UniformEquivalenceComparator;
    use std::convert::Infallible;

    /// Equivalent by value modulo 10, but every element hashes to 0 so the
    /// bucket always collides.
    struct CollidingModTen;

    impl EquivalenceComparator<u32, ()> for CollidingModTen {
        type Error = Infallible;

        fn equivalent(&self, a: &u32, _: &(), b: &u32, _: &()) -> Result<bool, Infallible> {
            Ok(a % 10 == b % 10)
        }

        fn equivalence_hash(&self, _: &u32, _: &()) -> Result<u64, Infallible> {
            Ok(0)
        }
    }

    /// Fails on any element greater than 100.
    struct Bounded;

    impl EquivalenceComparator<u32, ()> for Bounded {
        type Error = String;

        fn equivalent(&self, a: &u32, _: &(), b: &u32, _: &()) -> Result<bool, String> {
            Ok(a == b)
        }

        fn equivalence_hash(&self, a: &u32, _: &()) -> Result<u64, String> {
            if *a > 100 {
                return Err(format!("{a} out of range"));
            }
            Ok(u64::from(*a))
        }
    }

    #[test]
    fn test_empty_input() {
        let sets = create_equivalence_sets(Vec::<u32>::new(), &(), &CollidingModTen).unwrap();
        assert!(sets.is_empty());
    }

    #[test]
    fn test_collisions_do_not_merge_sets() {
        let sets = create_equivalence_sets([1, 11, 2, 21, 12, 3], &(), &CollidingModTen).unwrap();
        assert_eq!(sets.len(), 3);

        // Ordered by size then first-seen.
        assert_eq!(sets[0].members(), &[3]);
        assert_eq!(sets[1].members(), &[2, 12]);
        assert_eq!(sets[2].members(), &[1, 11, 21]);
        assert!(sets.iter().all(|s| s.hash() == 0));
    }

    #[test]
    fn test_every_element_in_exactly_one_set() {
        let input: Vec<u32> = (0..50).collect();
        let sets = create_equivalence_sets(input.clone(), &(), &CollidingModTen).unwrap();

        let total: usize = sets.iter().map(EquivalenceSet::len).sum();
        assert_eq!(total, input.len());
        for x in &input {
            assert_eq!(sets.iter().filter(|s| s.contains(x)).count(), 1);
        }
    }

    #[test]
    fn test_uniform_comparator_single_set() {
        let sets =
            create_equivalence_sets(["a", "b", "c"], &(), &UniformEquivalenceComparator).unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].len(), 3);
        assert_eq!(*sets[0].representative(), "a");
    }

    #[test]
    fn test_comparator_error_propagates() {
        let result = create_equivalence_sets([1, 2, 500], &(), &Bounded);
        assert_eq!(result.unwrap_err(), "500 out of range");
    }

    #[test]
    fn test_matching_compatible() {
        let left = create_equivalence_sets([1, 11, 2], &(), &CollidingModTen).unwrap();
        let right = create_equivalence_sets([22, 31, 41], &(), &CollidingModTen).unwrap();

        let pairing = match_equivalence_sets(&left, &(), &right, &(), &CollidingModTen).unwrap();
        assert!(pairing.is_compatible());
        assert_eq!(pairing.pairs.len(), 2);
        assert!(pairing.size_mismatches().is_empty());

        // Left set {2} (index 0) maps into right set {22} (index 0).
        assert_eq!(pairing.candidates_for(0), Some(0));
        assert_eq!(pairing.candidates_for(1), Some(1));
        assert_eq!(pairing.candidates_for(7), None);
    }

    #[test]
    fn test_matching_size_mismatch() {
        let left = create_equivalence_sets([1, 11, 2], &(), &CollidingModTen).unwrap();
        let right = create_equivalence_sets([1, 2, 12], &(), &CollidingModTen).unwrap();

        let pairing = match_equivalence_sets(&left, &(), &right, &(), &CollidingModTen).unwrap();
        assert!(pairing.unmatched_left.is_empty());
        assert!(pairing.unmatched_right.is_empty());
        assert_eq!(pairing.size_mismatches().len(), 2);
        assert!(!pairing.is_compatible());
    }

    #[test]
    fn test_matching_unmatched_sets() {
        let left = create_equivalence_sets([1, 2], &(), &CollidingModTen).unwrap();
        let right = create_equivalence_sets([1, 3, 4], &(), &CollidingModTen).unwrap();

        let pairing = match_equivalence_sets(&left, &(), &right, &(), &CollidingModTen).unwrap();
        assert_eq!(pairing.pairs.len(), 1);
        assert_eq!(pairing.unmatched_left.len(), 1);
        assert_eq!(pairing.unmatched_right.len(), 2);
        assert!(!pairing.is_compatible());
    }
}
