//! Sources of random permutations.
//!
//! Any [`rand::Rng`] is a [`PermutationSource`] through a Fisher-Yates
//! shuffle. [`FixedPermutations`] replays caller-chosen permutations and is
//! meant for harnesses that need a known index mapping.

use std::collections::VecDeque;

use rand::{Rng, seq::SliceRandom};

/// Produces permutations of `0..len` on demand.
pub trait PermutationSource {
    /// Returns a permutation of `0..len`. Entry `k` is the source index
    /// placed at position `k`.
    fn permutation(&mut self, len: usize) -> Vec<usize>;
}

impl<R: Rng + ?Sized> PermutationSource for R {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..len).collect();
        idx.shuffle(self);
        idx
    }
}

/// Replays queued permutations in order, then falls back to the identity.
#[derive(Debug, Clone, Default)]
pub struct FixedPermutations {
    queue: VecDeque<Vec<usize>>,
}

impl FixedPermutations {
    pub fn new(perms: impl IntoIterator<Item = Vec<usize>>) -> Self {
        Self {
            queue: perms.into_iter().collect(),
        }
    }

    /// A source that always yields the identity permutation.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Permutations not yet handed out.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl PermutationSource for FixedPermutations {
    fn permutation(&mut self, len: usize) -> Vec<usize> {
        self.queue
            .pop_front()
            .unwrap_or_else(|| (0..len).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn is_permutation(p: &[usize]) -> bool {
        let mut sorted = p.to_vec();
        sorted.sort_unstable();
        sorted.into_iter().eq(0..p.len())
    }

    #[test]
    fn rng_yields_bijection() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for len in [0, 1, 2, 17, 500] {
            let p = rng.permutation(len);
            assert_eq!(p.len(), len);
            assert!(is_permutation(&p));
        }
    }

    #[test]
    fn same_seed_same_permutation() {
        let a = ChaCha8Rng::seed_from_u64(42).permutation(64);
        let b = ChaCha8Rng::seed_from_u64(42).permutation(64);
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_draws_differ() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let first = rng.permutation(64);
        let second = rng.permutation(64);
        assert_ne!(first, second);
    }

    #[test]
    fn fixed_replays_then_identity() {
        let mut src = FixedPermutations::new([vec![2, 0, 1], vec![1, 0]]);
        assert_eq!(src.remaining(), 2);
        assert_eq!(src.permutation(3), vec![2, 0, 1]);
        assert_eq!(src.permutation(2), vec![1, 0]);
        assert_eq!(src.permutation(4), vec![0, 1, 2, 3]);
        assert_eq!(src.remaining(), 0);
    }
}
