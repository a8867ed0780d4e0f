//! Permutation + cut-point chromosome for VRP genetic algorithms.
//!
//! An [`Individual`] encodes a solution as a permutation of all customer
//! indices (1..=N, depot excluded) plus `V - 1` ascending cut points. The cut
//! points, together with the implicit boundaries 0 and N, partition the
//! permutation into exactly V contiguous routes, some of which may be empty.
//!
//! ```text
//! perm = [4, 2, 7, 1, 3, 6, 5]     cuts = [2, 5]
//! routes = [4, 2] | [7, 1, 3] | [6, 5]
//! ```

use rand::seq::index;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A candidate solution: customer permutation plus route boundaries.
///
/// # Examples
///
/// ```
/// use evo_routing::ga::{decode, Individual};
///
/// let ind = Individual::new(vec![3, 1, 2, 5, 4], vec![2, 3]);
/// assert_eq!(ind.len(), 5);
/// assert_eq!(decode(&ind, 3), vec![vec![3, 1], vec![2], vec![5, 4]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    perm: Vec<usize>,
    cuts: Vec<usize>,
}

impl Individual {
    /// Creates an individual from a permutation and its cut points.
    pub fn new(perm: Vec<usize>, cuts: Vec<usize>) -> Self {
        Self { perm, cuts }
    }

    /// Creates an individual with no cut points, for perm-only encodings.
    pub fn from_perm(perm: Vec<usize>) -> Self {
        Self::new(perm, Vec::new())
    }

    /// Random permutation of `1..=num_customers` with `num_vehicles - 1`
    /// distinct random cuts.
    pub fn random<R: Rng>(num_customers: usize, num_vehicles: usize, rng: &mut R) -> Self {
        let mut perm: Vec<usize> = (1..=num_customers).collect();
        perm.shuffle(rng);
        let cuts = random_cuts(num_customers, num_vehicles, rng);
        Self::new(perm, cuts)
    }

    /// Re-encodes an ordered list of routes.
    ///
    /// The permutation is the concatenation of `routes`; the cuts are the
    /// running route lengths, normalized by [`settle_cuts`]. An empty route at
    /// either end of the list therefore does not survive re-encoding
    /// verbatim: its boundary moves to the nearest free valid position.
    pub fn from_routes(routes: &[Vec<usize>]) -> Self {
        let perm: Vec<usize> = routes.iter().flatten().copied().collect();
        let mut boundary = 0;
        let raw: Vec<usize> = routes
            .iter()
            .take(routes.len().saturating_sub(1))
            .map(|r| {
                boundary += r.len();
                boundary
            })
            .collect();
        let cuts = settle_cuts(&raw, perm.len());
        Self::new(perm, cuts)
    }

    /// The customer permutation.
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Mutable access to the customer permutation.
    pub fn perm_mut(&mut self) -> &mut Vec<usize> {
        &mut self.perm
    }

    /// The route boundaries.
    pub fn cuts(&self) -> &[usize] {
        &self.cuts
    }

    /// Mutable access to the route boundaries.
    pub fn cuts_mut(&mut self) -> &mut Vec<usize> {
        &mut self.cuts
    }

    /// Number of customers in the permutation.
    pub fn len(&self) -> usize {
        self.perm.len()
    }

    /// Returns `true` if the permutation is empty.
    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }
}

/// Splits the permutation at the individual's cuts into `num_vehicles` routes.
///
/// Concatenating the result always reproduces `individual.perm()`. Cuts are
/// read in order and clamped so that boundaries never move backwards or past
/// the end; duplicate cuts yield empty routes. Missing cuts become trailing
/// empty routes and surplus cuts are ignored, so exactly
/// `max(num_vehicles, 1)` routes come back.
pub fn decode(individual: &Individual, num_vehicles: usize) -> Vec<Vec<usize>> {
    let perm = individual.perm();
    let n = perm.len();
    let num_routes = num_vehicles.max(1);
    let mut routes = Vec::with_capacity(num_routes);

    let mut start = 0;
    for &cut in individual.cuts().iter().take(num_routes - 1) {
        let end = cut.clamp(start, n);
        routes.push(perm[start..end].to_vec());
        start = end;
    }
    while routes.len() + 1 < num_routes {
        routes.push(Vec::new());
    }
    routes.push(perm[start..].to_vec());
    routes
}

/// Splits a permutation into `num_vehicles` consecutive, nearly equal routes.
///
/// The first `n % num_vehicles` routes hold one extra customer. This is the
/// decoding used by perm-only encodings, which carry no cuts.
///
/// # Examples
///
/// ```
/// use evo_routing::ga::fixed_split;
///
/// let routes = fixed_split(&[1, 2, 3, 4, 5, 6, 7], 3);
/// assert_eq!(routes, vec![vec![1, 2, 3], vec![4, 5], vec![6, 7]]);
/// ```
pub fn fixed_split(perm: &[usize], num_vehicles: usize) -> Vec<Vec<usize>> {
    let num_routes = num_vehicles.max(1);
    let base = perm.len() / num_routes;
    let rem = perm.len() % num_routes;

    let mut routes = Vec::with_capacity(num_routes);
    let mut start = 0;
    for i in 0..num_routes {
        let size = base + usize::from(i < rem);
        routes.push(perm[start..start + size].to_vec());
        start += size;
    }
    routes
}

/// Draws `num_vehicles - 1` distinct cuts from `[1, num_customers - 1]`, sorted.
///
/// Returns as many cuts as the range can hold when it is too small.
pub fn random_cuts<R: Rng>(num_customers: usize, num_vehicles: usize, rng: &mut R) -> Vec<usize> {
    let available = num_customers.saturating_sub(1);
    let wanted = num_vehicles.saturating_sub(1).min(available);
    let mut cuts: Vec<usize> = index::sample(rng, available, wanted)
        .into_iter()
        .map(|i| i + 1)
        .collect();
    cuts.sort_unstable();
    cuts
}

/// Normalizes raw boundaries into distinct sorted cuts in `[1, n - 1]`.
///
/// Each value, taken in ascending order, is clamped into range and then
/// placed on the nearest value not already taken, looking upward first and
/// then downward at each distance. Values that find no free slot (only
/// possible when there are more than `n - 1` of them) are dropped.
///
/// # Examples
///
/// ```
/// use evo_routing::ga::settle_cuts;
///
/// // routes [], [a, b], [c] over n = 3 give raw boundaries [0, 2]
/// assert_eq!(settle_cuts(&[0, 2], 3), vec![1, 2]);
/// assert_eq!(settle_cuts(&[4, 4, 4], 6), vec![3, 4, 5]);
/// ```
pub fn settle_cuts(raw: &[usize], n: usize) -> Vec<usize> {
    if n < 2 {
        return Vec::new();
    }
    let hi = n - 1;
    let mut sorted = raw.to_vec();
    sorted.sort_unstable();

    let mut taken = vec![false; n];
    let mut cuts = Vec::with_capacity(sorted.len());
    for value in sorted {
        if let Some(slot) = nearest_free(value.clamp(1, hi), hi, &taken) {
            taken[slot] = true;
            cuts.push(slot);
        }
    }
    cuts.sort_unstable();
    cuts
}

fn nearest_free(target: usize, hi: usize, taken: &[bool]) -> Option<usize> {
    for d in 0..hi {
        let up = target + d;
        if up <= hi && !taken[up] {
            return Some(up);
        }
        if d > 0 && target > d && !taken[target - d] {
            return Some(target - d);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_individual_new() {
        let ind = Individual::new(vec![1, 2, 3], vec![1]);
        assert_eq!(ind.perm(), &[1, 2, 3]);
        assert_eq!(ind.cuts(), &[1]);
        assert_eq!(ind.len(), 3);
        assert!(!ind.is_empty());
    }

    #[test]
    fn test_individual_empty() {
        let ind = Individual::from_perm(vec![]);
        assert!(ind.is_empty());
        assert_eq!(decode(&ind, 1), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_random_is_valid() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let ind = Individual::random(12, 3, &mut rng);
        let mut sorted = ind.perm().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, (1..=12).collect::<Vec<_>>());
        assert_eq!(ind.cuts().len(), 2);
        assert!(ind.cuts()[0] < ind.cuts()[1]);
        assert!(ind.cuts().iter().all(|&c| (1..12).contains(&c)));
    }

    #[test]
    fn test_random_cuts_single_vehicle() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(random_cuts(5, 1, &mut rng).is_empty());
        assert!(random_cuts(1, 1, &mut rng).is_empty());
    }

    #[test]
    fn test_random_cuts_fill_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(random_cuts(4, 4, &mut rng), vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_basic() {
        let ind = Individual::new(vec![4, 2, 7, 1, 3, 6, 5], vec![2, 5]);
        assert_eq!(
            decode(&ind, 3),
            vec![vec![4, 2], vec![7, 1, 3], vec![6, 5]]
        );
    }

    #[test]
    fn test_decode_duplicate_cuts_give_empty_route() {
        let ind = Individual::new(vec![1, 2, 3, 4], vec![2, 2]);
        assert_eq!(decode(&ind, 3), vec![vec![1, 2], vec![], vec![3, 4]]);
    }

    #[test]
    fn test_decode_pads_missing_routes() {
        let ind = Individual::new(vec![1, 2, 3], vec![1]);
        assert_eq!(decode(&ind, 3), vec![vec![1], vec![], vec![2, 3]]);
    }

    #[test]
    fn test_decode_ignores_surplus_cuts() {
        let ind = Individual::new(vec![1, 2, 3], vec![1, 2]);
        assert_eq!(decode(&ind, 2), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn test_decode_unsorted_cuts_keep_concatenation() {
        let ind = Individual::new(vec![1, 2, 3, 4], vec![3, 1]);
        let routes = decode(&ind, 3);
        assert_eq!(routes.len(), 3);
        let flat: Vec<usize> = routes.concat();
        assert_eq!(flat, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_fixed_split_even_and_uneven() {
        assert_eq!(
            fixed_split(&[1, 2, 3, 4], 2),
            vec![vec![1, 2], vec![3, 4]]
        );
        assert_eq!(
            fixed_split(&[1, 2], 3),
            vec![vec![1], vec![2], vec![]]
        );
    }

    #[test]
    fn test_from_routes_roundtrip() {
        let routes = vec![vec![5, 1], vec![3], vec![2, 4]];
        let ind = Individual::from_routes(&routes);
        assert_eq!(ind.perm(), &[5, 1, 3, 2, 4]);
        assert_eq!(ind.cuts(), &[2, 3]);
        assert_eq!(decode(&ind, 3), routes);
    }

    #[test]
    fn test_from_routes_empty_middle_route() {
        let routes = vec![vec![5, 1], vec![], vec![3, 2, 4]];
        let ind = Individual::from_routes(&routes);
        assert_eq!(ind.perm(), &[5, 1, 3, 2, 4]);
        // boundaries [2, 2] collide; the second moves up to 3
        assert_eq!(ind.cuts(), &[2, 3]);
    }

    #[test]
    fn test_settle_cuts_clamps_and_spreads() {
        assert_eq!(settle_cuts(&[0, 0], 4), vec![1, 2]);
        assert_eq!(settle_cuts(&[4, 4], 4), vec![2, 3]);
        assert_eq!(settle_cuts(&[1, 3], 5), vec![1, 3]);
        assert!(settle_cuts(&[0], 1).is_empty());
    }

    #[test]
    fn test_settle_cuts_drops_overflow() {
        assert_eq!(settle_cuts(&[1, 1, 1, 1], 3), vec![1, 2]);
    }

    #[test]
    fn test_clone_is_independent() {
        let ind = Individual::new(vec![1, 2, 3], vec![1]);
        let mut copy = ind.clone();
        copy.perm_mut().swap(0, 2);
        copy.cuts_mut()[0] = 2;
        assert_eq!(ind.perm(), &[1, 2, 3]);
        assert_eq!(ind.cuts(), &[1]);
    }
}
