//! Unbiased Fisher–Yates shuffling.

use rand::Rng;

/// Shuffle `items` in place.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen slot at or below it. Every permutation is equally likely given a
/// uniform source.
pub fn shuffle_in_place<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `items`, leaving the input untouched.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(&mut out, rng);
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: Vec<String> = Vec::new();
        assert!(shuffle(&empty, &mut rng).is_empty());
        assert_eq!(shuffle(&names(&["solo"]), &mut rng), names(&["solo"]));
    }

    #[test]
    fn is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input = names(&["A", "B", "C", "D", "E", "E"]);
        let mut out = shuffle(&input, &mut rng);
        assert_eq!(out.len(), input.len());
        out.sort();
        let mut sorted = input.clone();
        sorted.sort();
        assert_eq!(out, sorted);
    }

    #[test]
    fn input_not_mutated() {
        let mut rng = StdRng::seed_from_u64(3);
        let input = names(&["A", "B", "C", "D"]);
        let _ = shuffle(&input, &mut rng);
        assert_eq!(input, names(&["A", "B", "C", "D"]));
    }

    #[test]
    fn deterministic_with_seed() {
        let input = names(&["A", "B", "C", "D", "E", "F", "G"]);
        let a = shuffle(&input, &mut StdRng::seed_from_u64(99));
        let b = shuffle(&input, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn permutations_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2024);
        let input = ["a", "b", "c"];
        let trials = 6000;
        let mut counts: HashMap<Vec<&str>, u32> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(shuffle(&input, &mut rng)).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for (perm, count) in &counts {
            assert!(
                (800..=1200).contains(count),
                "ordering {perm:?} appeared {count} times"
            );
        }
    }
}
