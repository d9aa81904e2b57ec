use rand::Rng;

/// Produces `count` strictly increasing values, each exceeding the previous one (or zero) by a
/// uniformly chosen gap in `1..=max_gap`. Stops early instead of overflowing `i32`.
pub fn increasing_values<R: Rng>(rng: &mut R, count: usize, max_gap: u16) -> Vec<i32> {
    assert!(max_gap > 0, "gap must be positive");

    let mut values = Vec::with_capacity(count);
    let mut prev: i32 = 0;
    for _ in 0..count {
        let gap = i32::from(rng.random_range(1..=max_gap));
        let Some(value) = prev.checked_add(gap) else {
            break;
        };
        values.push(value);
        prev = value;
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn values_increase_by_bounded_gaps() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = increasing_values(&mut rng, 500, 25);
        assert_eq!(values.len(), 500);
        assert!((1..=25).contains(&values[0]));
        for pair in values.windows(2) {
            assert!((1..=25).contains(&(pair[1] - pair[0])));
        }
    }

    #[test]
    fn same_seed_same_values() {
        let a = increasing_values(&mut StdRng::seed_from_u64(42), 50, 25);
        let b = increasing_values(&mut StdRng::seed_from_u64(42), 50, 25);
        assert_eq!(a, b);
    }

    #[test]
    fn unit_gap_counts_up() {
        let values = increasing_values(&mut StdRng::seed_from_u64(0), 5, 1);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }
}
