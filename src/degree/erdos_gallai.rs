use num::Integer;

use super::*;

/// Checks the Erdős–Gallai inequalities.
///
/// After sorting `d_1 >= ... >= d_n`, the sequence is graphical iff its sum is even and for every
/// `k` in `1..=n`:
/// `d_1 + ... + d_k <= k(k - 1) + min(d_{k+1}, k) + ... + min(d_n, k)`.
pub(super) fn check(degrees: &[NumNodes]) -> Result<(), SequenceError> {
    let sorted = degrees
        .iter()
        .map(|&d| d as u64)
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect_vec();

    let sum: u64 = sorted.iter().sum();
    if sum.is_odd() {
        return Err(SequenceError::OddSum { sum });
    }

    let mut prefix = 0;
    for (k, &d) in (1u64..).zip(sorted.iter()) {
        prefix += d;

        let tail: u64 = sorted[k as usize..].iter().map(|&d| d.min(k)).sum();
        if prefix > k * (k - 1) + tail {
            return Err(SequenceError::NotGraphical {
                k: k as NumNodes,
            });
        }

        // The remaining inequalities hold trivially once the degrees drop below `k`
        if d < k {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn small_examples() {
        assert_eq!(check(&[]), Ok(()));
        assert_eq!(check(&[0]), Ok(()));
        assert_eq!(check(&[3, 3, 2, 2, 2]), Ok(()));
        assert_eq!(check(&[2, 2, 2, 2]), Ok(()));
        assert_eq!(check(&[1, 1]), Ok(()));
        assert_eq!(check(&[3, 3, 3, 3]), Ok(()));

        assert_eq!(check(&[1]), Err(SequenceError::OddSum { sum: 1 }));
        assert_eq!(check(&[1, 1, 1]), Err(SequenceError::OddSum { sum: 3 }));
        assert_eq!(
            check(&[3, 3, 1, 1]),
            Err(SequenceError::NotGraphical { k: 2 })
        );
        assert_eq!(
            check(&[2, 2, 0]),
            Err(SequenceError::NotGraphical { k: 1 })
        );
    }

    #[test]
    fn is_graphical_domain() {
        assert!(!is_graphical(&[2, 2, -2, 2]));
        assert!(!is_graphical(&[4, 2, 2, 2]));
        assert!(!is_graphical(&[i64::MIN]));
        assert!(!is_graphical(&[i64::MAX, 1]));
        assert!(is_graphical(&[0, 0, 0]));
    }

    #[test]
    fn odd_sums_are_never_graphical() {
        let rng = &mut Pcg64::seed_from_u64(7);
        for _ in 0..500 {
            let n = rng.random_range(1..12usize);
            let seq: Vec<i64> = (0..n).map(|_| rng.random_range(0..n as i64)).collect();
            if seq.iter().sum::<i64>() % 2 == 1 {
                assert!(!is_graphical(&seq), "{seq:?}");
            }
        }
    }

    #[test]
    fn early_exit_agrees_with_full_check() {
        // brute-force the full set of inequalities without the early exit
        fn full(degrees: &[NumNodes]) -> bool {
            let mut d = degrees.iter().map(|&x| x as u64).collect_vec();
            d.sort_unstable_by(|a, b| b.cmp(a));
            let n = d.len();
            d.iter().sum::<u64>() % 2 == 0
                && (1..=n).all(|k| {
                    let k64 = k as u64;
                    d[..k].iter().sum::<u64>()
                        <= k64 * (k64 - 1) + d[k..].iter().map(|&x| x.min(k64)).sum::<u64>()
                })
        }

        let rng = &mut Pcg64::seed_from_u64(11);
        for _ in 0..2000 {
            let n = rng.random_range(1..10 as NumNodes);
            let seq = (0..n).map(|_| rng.random_range(0..n)).collect_vec();
            assert_eq!(check(&seq).is_ok(), full(&seq), "{seq:?}");
        }
    }
}
