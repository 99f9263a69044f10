//! Positions still available for a forced substitution.

use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionPool(Vec<usize>);

impl PositionPool {
    /// Every index `0..length`, in order.
    pub fn new(length: usize) -> Self {
        PositionPool((0..length).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, position: usize) -> bool {
        self.0.contains(&position)
    }

    /// Draw one slot uniformly and remove it. `None` once the pool is drained.
    pub fn take<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<usize> {
        self.take_where(rng, |_| true)
    }

    /// Draw uniformly among the positions `allowed` accepts and remove it.
    /// `None` when no remaining position is allowed.
    pub fn take_where<R, F>(&mut self, rng: &mut R, allowed: F) -> Option<usize>
    where
        R: Rng + ?Sized,
        F: Fn(usize) -> bool,
    {
        let candidates: Vec<usize> = (0..self.0.len())
            .filter(|&slot| allowed(self.0[slot]))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        let slot = candidates[rng.gen_range(0..candidates.len())];
        Some(self.0.remove(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn take_never_repeats_and_drains() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut pool = PositionPool::new(10);
        let mut seen = Vec::new();

        while let Some(pos) = pool.take(&mut rng) {
            assert!(pos < 10);
            assert!(!seen.contains(&pos));
            assert!(!pool.contains(pos));
            seen.push(pos);
        }

        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
        assert!(pool.is_empty());
    }

    #[test]
    fn removal_keeps_remaining_order() {
        let mut rng = StepRng::new(0, 0);
        let mut pool = PositionPool::new(4);
        assert_eq!(pool.take(&mut rng), Some(0));
        assert_eq!(pool.take(&mut rng), Some(1));
        assert_eq!(pool, PositionPool(vec![2, 3]));
    }

    #[test]
    fn take_where_skips_disallowed_positions() {
        let mut rng = StepRng::new(0, 0);
        let mut pool = PositionPool::new(5);
        assert_eq!(pool.take_where(&mut rng, |pos| pos > 2), Some(3));
        assert_eq!(pool.take_where(&mut rng, |pos| pos > 2), Some(4));
        assert_eq!(pool.take_where(&mut rng, |pos| pos > 2), None);
        assert_eq!(pool, PositionPool(vec![0, 1, 2]));
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut rng = StepRng::new(0, 0);
        let mut pool = PositionPool::new(0);
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.take(&mut rng), None);
    }
}
