//! Tournament selection over a scored population.

use rand::Rng;

/// How many times [`select_parents`] redraws the second parent when it
/// collides with the first.
pub const MAX_RESELECT: usize = 5;

/// Draws `k` indices uniformly with replacement and returns the one with the
/// lowest cost. Ties go to the first drawn.
///
/// `k == 0` is treated as 1, which is plain uniform choice.
///
/// # Panics
///
/// Panics if `costs` is empty.
///
/// # Examples
///
/// ```
/// use evo_routing::ga::tournament_select;
/// use rand::SeedableRng;
///
/// let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
/// let costs = [9.0, 3.0, 7.0];
/// let winner = tournament_select(&costs, 3, &mut rng);
/// assert!(winner < costs.len());
/// ```
pub fn tournament_select<R: Rng>(costs: &[f64], k: usize, rng: &mut R) -> usize {
    let mut best = rng.random_range(0..costs.len());
    for _ in 1..k.max(1) {
        let challenger = rng.random_range(0..costs.len());
        if costs[challenger] < costs[best] {
            best = challenger;
        }
    }
    best
}

/// Picks two parents by tournament, redrawing the second up to
/// [`MAX_RESELECT`] times while it equals the first.
///
/// With a single individual both parents are necessarily the same.
pub fn select_parents<R: Rng>(costs: &[f64], k: usize, rng: &mut R) -> (usize, usize) {
    let first = tournament_select(costs, k, rng);
    let mut second = tournament_select(costs, k, rng);
    if costs.len() > 1 {
        for _ in 0..MAX_RESELECT {
            if second != first {
                break;
            }
            second = tournament_select(costs, k, rng);
        }
    }
    (first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_full_pressure_picks_best_often() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let costs = [10.0, 1.0, 10.0, 10.0];
        let wins = (0..200)
            .filter(|_| tournament_select(&costs, 8, &mut rng) == 1)
            .count();
        assert!(wins > 150, "best won only {wins} of 200");
    }

    #[test]
    fn test_single_individual() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(tournament_select(&[5.0], 3, &mut rng), 0);
        assert_eq!(select_parents(&[5.0], 3, &mut rng), (0, 0));
    }

    #[test]
    fn test_ties_keep_first_drawn() {
        let costs = [2.0, 2.0, 2.0];
        let mut a = ChaCha8Rng::seed_from_u64(3);
        let mut b = ChaCha8Rng::seed_from_u64(3);
        let winner = tournament_select(&costs, 4, &mut a);
        let first_draw = b.random_range(0..costs.len());
        assert_eq!(winner, first_draw);
    }

    #[test]
    fn test_k_one_is_uniform_choice() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let costs = [1.0, 100.0];
        let worst_picks = (0..400)
            .filter(|_| tournament_select(&costs, 1, &mut rng) == 1)
            .count();
        assert!(worst_picks > 100, "worst picked {worst_picks} of 400");
    }

    #[test]
    fn test_select_parents_prefers_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let costs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let distinct = (0..100)
            .filter(|_| {
                let (a, b) = select_parents(&costs, 2, &mut rng);
                a != b
            })
            .count();
        assert!(distinct > 95);
    }
}
