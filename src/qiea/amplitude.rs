//! Amplitude vectors and their measurement into permutations.

use rand::Rng;

/// One quantum-inspired individual: an amplitude in `[0, 1]` per customer.
///
/// `amplitudes[i]` belongs to customer `i + 1`. A higher amplitude pulls the
/// customer toward the front of the measured permutation.
///
/// # Examples
///
/// ```
/// use evo_routing::qiea::QuantumIndividual;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3);
/// let mut q = QuantumIndividual::new(4);
/// for _ in 0..20 {
///     q.rotate_towards(&[3, 1, 4, 2], 0.1);
/// }
/// assert_eq!(q.measure(0.01, &mut rng), vec![3, 1, 4, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuantumIndividual {
    amplitudes: Vec<f64>,
}

impl QuantumIndividual {
    /// Creates an individual in maximum uncertainty (all amplitudes 0.5).
    pub fn new(num_customers: usize) -> Self {
        Self {
            amplitudes: vec![0.5; num_customers],
        }
    }

    /// Current amplitudes, indexed by `customer - 1`.
    pub fn amplitudes(&self) -> &[f64] {
        &self.amplitudes
    }

    /// Collapses the amplitudes into a permutation of `1..=N`.
    ///
    /// Each amplitude gets independent uniform noise in `[0, noise)` and
    /// customers are ordered by the noisy value, highest first. Exact ties
    /// keep ascending customer order.
    pub fn measure<R: Rng>(&self, noise: f64, rng: &mut R) -> Vec<usize> {
        let keys: Vec<f64> = self
            .amplitudes
            .iter()
            .map(|&a| a + rng.random::<f64>() * noise)
            .collect();
        let mut order: Vec<usize> = (0..keys.len()).collect();
        order.sort_by(|&a, &b| keys[b].total_cmp(&keys[a]));
        order.into_iter().map(|i| i + 1).collect()
    }

    /// Moves every amplitude one `step` toward agreement with `best`.
    ///
    /// The customer at rank `r` of `best` (of `N`) has target amplitude
    /// `1 - r / (N - 1)`, so the best permutation is what a noiseless
    /// measurement of the targets would return. Each amplitude below its
    /// target grows by `step`, each above shrinks by `step`, clamped to
    /// `[0, 1]`.
    pub fn rotate_towards(&mut self, best: &[usize], step: f64) {
        let span = best.len().saturating_sub(1).max(1) as f64;
        for (rank, &customer) in best.iter().enumerate() {
            let target = 1.0 - rank as f64 / span;
            let amp = &mut self.amplitudes[customer - 1];
            if *amp < target {
                *amp = (*amp + step).clamp(0.0, 1.0);
            } else if *amp > target {
                *amp = (*amp - step).clamp(0.0, 1.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_is_uncertain() {
        let q = QuantumIndividual::new(3);
        assert_eq!(q.amplitudes(), &[0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_measure_is_permutation() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let q = QuantumIndividual::new(8);
        let mut perm = q.measure(0.02, &mut rng);
        perm.sort_unstable();
        assert_eq!(perm, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_measure_without_noise_is_stable() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let q = QuantumIndividual::new(4);
        assert_eq!(q.measure(0.0, &mut rng), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_measure_noise_varies_uncertain_order() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let q = QuantumIndividual::new(6);
        let first = q.measure(0.1, &mut rng);
        let differs = (0..20).any(|_| q.measure(0.1, &mut rng) != first);
        assert!(differs);
    }

    #[test]
    fn test_rotate_moves_toward_targets() {
        let mut q = QuantumIndividual::new(3);
        q.rotate_towards(&[2, 3, 1], 0.1);
        // targets: customer 2 -> 1.0, customer 3 -> 0.5, customer 1 -> 0.0
        let a = q.amplitudes();
        assert!((a[1] - 0.6).abs() < 1e-12);
        assert!((a[2] - 0.5).abs() < 1e-12);
        assert!((a[0] - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_rotate_clamps() {
        let mut q = QuantumIndividual::new(2);
        for _ in 0..20 {
            q.rotate_towards(&[1, 2], 0.3);
        }
        assert!(q.amplitudes().iter().all(|&a| (0.0..=1.0).contains(&a)));
        assert!(q.amplitudes()[0] > q.amplitudes()[1]);
    }

    #[test]
    fn test_rotate_single_customer() {
        let mut q = QuantumIndividual::new(1);
        q.rotate_towards(&[1], 0.25);
        assert!((q.amplitudes()[0] - 0.75).abs() < 1e-12);
    }
}
