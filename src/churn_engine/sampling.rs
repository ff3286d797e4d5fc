use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly picks `amount` distinct elements (or all of them, if there are
/// fewer) using a partial Fisher-Yates shuffle.
///
/// The result depends only on the order of `items` and the state of `rng`,
/// so callers that pass a stably ordered collection get reproducible picks.
pub fn sample_without_replacement<T, R>(rng: &mut R, mut items: Vec<T>, amount: usize) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let amount = amount.min(items.len());
    if amount == 0 {
        return Vec::new();
    }
    let (chosen, _) = items.partial_shuffle(rng, amount);
    chosen.to_vec()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_sample_is_distinct_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let items: Vec<u32> = (0..50).collect();

        let picked = sample_without_replacement(&mut rng, items.clone(), 20);
        assert_eq!(picked.len(), 20);
        let unique: HashSet<_> = picked.iter().collect();
        assert_eq!(unique.len(), 20);
        assert!(picked.iter().all(|i| items.contains(i)));
    }

    #[test]
    fn test_sample_more_than_available() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut picked = sample_without_replacement(&mut rng, vec!["a", "b"], 5);
        picked.sort();
        assert_eq!(picked, vec!["a", "b"]);
    }

    #[test]
    fn test_sample_zero_or_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_without_replacement(&mut rng, vec![1, 2, 3], 0).is_empty());
        assert!(sample_without_replacement(&mut rng, Vec::<u8>::new(), 3).is_empty());
    }

    #[test]
    fn test_sample_reaches_every_element() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.extend(sample_without_replacement(&mut rng, (0..10).collect(), 1));
        }
        assert_eq!(seen.len(), 10);
    }
}
