//! Ordered partitions of conserved totals
//!
//! Every way of splitting a total into a fixed number of non-negative parts,
//! used to enumerate the mass and charge of candidate daughter fragments.

/// All ordered partitions of `n` into `arity` parts
///
/// The last part varies slowest and the first takes the remainder, which is
/// never zero unless `n` is. Fragments are therefore listed largest-first,
/// and a split that only moves an empty part around is not repeated.
///
/// ```rust
/// # use nreact_reactions::partitions;
/// assert_eq!(
///     partitions(3, 3),
///     vec![
///         vec![3, 0, 0],
///         vec![2, 1, 0],
///         vec![1, 2, 0],
///         vec![2, 0, 1],
///         vec![1, 1, 1],
///         vec![1, 0, 2],
///     ]
/// );
/// ```
///
/// The degenerate `n = 0` case is the single all-zero partition.
pub fn partitions(n: u32, arity: usize) -> Vec<Vec<u32>> {
    if n == 0 {
        return vec![vec![0; arity]];
    }

    match arity {
        0 => Vec::new(),
        1 => vec![vec![n]],
        _ => (0..n)
            .flat_map(|last| {
                partitions(n - last, arity - 1)
                    .into_iter()
                    .map(move |mut head| {
                        head.push(last);
                        head
                    })
            })
            .collect(),
    }
}

/// Partitions of `n` into three parts
///
/// Convenience for the (fragment, fragment, fragment) splits used by the
/// outcome enumerator.
pub fn partitions3(n: u32) -> Vec<[u32; 3]> {
    partitions(n, 3)
        .into_iter()
        .map(|p| [p[0], p[1], p[2]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_partition_sums_to_total() {
        for n in 0..12 {
            for k in 1..5 {
                assert!(partitions(n, k).iter().all(|p| p.iter().sum::<u32>() == n));
                assert!(partitions(n, k).iter().all(|p| p.len() == k));
            }
        }
    }

    #[test]
    fn three_part_count() {
        for n in 1..20 {
            assert_eq!(partitions3(n).len() as u32, n * (n + 1) / 2);
        }
        assert_eq!(partitions3(5).len(), 15);
    }

    #[test]
    fn degenerate_totals() {
        assert_eq!(partitions3(0), vec![[0, 0, 0]]);
        assert_eq!(partitions(1, 3), vec![vec![1, 0, 0]]);
        assert!(partitions(4, 0).is_empty());
    }

    #[test]
    fn restartable() {
        assert_eq!(partitions(7, 3), partitions(7, 3));
    }
}
