//! Crossover and mutation operators on the `(perm, cuts)` encoding.
//!
//! Permutation operators work on any slice of customer indices. Cut
//! operators take `n` (customer count) and `num_vehicles` explicitly and
//! always hand back cuts inside `[1, n - 1]`.

use std::collections::HashSet;
use std::ops::Range;

use rand::seq::index;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::chromosome::{decode, Individual};

/// Order crossover (OX) with a random segment.
///
/// Picks two distinct positions `a < b` and keeps `parent1[a..=b]` in place.
/// Falls back to a copy of `parent1` when there are fewer than two genes.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    if n < 2 {
        return parent1.to_vec();
    }
    let picks = index::sample(rng, n, 2);
    let (a, b) = (picks.index(0).min(picks.index(1)), picks.index(0).max(picks.index(1)));
    order_crossover_segment(parent1, parent2, a..b + 1)
}

/// Order crossover with an explicit segment.
///
/// `parent1[segment]` is copied verbatim; the remaining positions are filled
/// left to right with `parent2`'s customers that are not in the segment, in
/// `parent2`'s order.
///
/// # Examples
///
/// ```
/// use evo_routing::ga::operators::order_crossover_segment;
///
/// let child = order_crossover_segment(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1], 1..3);
/// assert_eq!(child, vec![5, 2, 3, 4, 1]);
/// ```
pub fn order_crossover_segment(
    parent1: &[usize],
    parent2: &[usize],
    segment: Range<usize>,
) -> Vec<usize> {
    let kept: HashSet<usize> = parent1[segment.clone()].iter().copied().collect();
    let mut fill = parent2.iter().copied().filter(|c| !kept.contains(c));

    let mut child = Vec::with_capacity(parent1.len());
    for (i, &gene) in parent1.iter().enumerate() {
        if segment.contains(&i) {
            child.push(gene);
        } else if let Some(c) = fill.next() {
            child.push(c);
        }
    }
    child
}

/// Single-point crossover of cut vectors with a random split point.
///
/// The split point is uniform in `[1, num_vehicles - 2]`, or 1 when there are
/// at most two vehicles.
pub fn cut_point_crossover<R: Rng>(
    cuts1: &[usize],
    cuts2: &[usize],
    n: usize,
    num_vehicles: usize,
    rng: &mut R,
) -> Vec<usize> {
    let split = if num_vehicles > 2 {
        rng.random_range(1..=num_vehicles - 2)
    } else {
        1
    };
    cut_point_crossover_at(cuts1, cuts2, split, n, num_vehicles, rng)
}

/// Single-point crossover of cut vectors at `split`.
///
/// Takes `cuts1[..split] ++ cuts2[split..]`, removes duplicates and values
/// outside `[1, n - 1]`, then pads with random unused valid values until
/// `num_vehicles - 1` cuts exist. The result is sorted. The generator is only
/// consulted when padding is needed.
///
/// # Examples
///
/// ```
/// use evo_routing::ga::operators::cut_point_crossover_at;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(0);
/// let child = cut_point_crossover_at(&[3, 7], &[2, 6], 1, 10, 3, &mut rng);
/// assert_eq!(child, vec![3, 6]);
/// ```
pub fn cut_point_crossover_at<R: Rng>(
    cuts1: &[usize],
    cuts2: &[usize],
    split: usize,
    n: usize,
    num_vehicles: usize,
    rng: &mut R,
) -> Vec<usize> {
    let head = &cuts1[..split.min(cuts1.len())];
    let tail = &cuts2[split.min(cuts2.len())..];

    let mut cuts: Vec<usize> = head
        .iter()
        .chain(tail)
        .copied()
        .filter(|&c| c >= 1 && c < n)
        .collect();
    cuts.sort_unstable();
    cuts.dedup();

    let wanted = num_vehicles.saturating_sub(1);
    cuts.truncate(wanted);
    if cuts.len() < wanted {
        let free: Vec<usize> = (1..n).filter(|c| cuts.binary_search(c).is_err()).collect();
        let missing = wanted - cuts.len();
        cuts.extend(free.choose_multiple(rng, missing).copied());
        cuts.sort_unstable();
    }
    cuts
}

/// Swap mutation: each position, with probability `rate`, trades places with
/// a uniformly chosen other position.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rate: f64, rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    for i in 0..n {
        if rng.random_bool(rate) {
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            perm.swap(i, j);
        }
    }
}

/// Jitter mutation: each cut, with probability `rate`, moves by -1, 0 or +1,
/// clamped to `[1, n - 1]`. Cuts are re-sorted afterwards; duplicates are
/// left in place and simply decode to empty routes.
pub fn jitter_mutation<R: Rng>(cuts: &mut [usize], rate: f64, n: usize, rng: &mut R) {
    if n < 2 {
        return;
    }
    let hi = (n - 1) as i64;
    for cut in cuts.iter_mut() {
        if rng.random_bool(rate) {
            let delta: i64 = rng.random_range(-1..=1);
            *cut = (*cut as i64 + delta).clamp(1, hi) as usize;
        }
    }
    cuts.sort_unstable();
}

/// Route-aware relocation: with probability `rate`, moves one customer from
/// a random non-empty route to a random position of a random route (possibly
/// the same one), then re-encodes with [`Individual::from_routes`].
///
/// Returns `true` if the individual was changed.
pub fn route_mutation<R: Rng>(
    individual: &mut Individual,
    num_vehicles: usize,
    rate: f64,
    rng: &mut R,
) -> bool {
    if !rng.random_bool(rate) {
        return false;
    }
    let mut routes = decode(individual, num_vehicles);
    let sources: Vec<usize> = (0..routes.len()).filter(|&r| !routes[r].is_empty()).collect();
    let Some(&from) = sources.choose(rng) else {
        return false;
    };

    let pos = rng.random_range(0..routes[from].len());
    let customer = routes[from].remove(pos);
    let to = rng.random_range(0..routes.len());
    let at = rng.random_range(0..=routes[to].len());
    routes[to].insert(at, customer);

    *individual = Individual::from_routes(&routes);
    true
}
