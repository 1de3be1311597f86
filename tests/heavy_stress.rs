#![cfg(feature = "heavy")]
use painter_partition::{solve, PartitionSolver};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Binary search on the answer with a greedy feasibility check.
fn binary_search_baseline(seq: &[u64], k: usize) -> u64 {
    let feasible = |cap: u64| {
        let mut parts = 1;
        let mut acc = 0u64;
        for &x in seq {
            if acc + x > cap {
                parts += 1;
                acc = x;
            } else {
                acc += x;
            }
        }
        parts <= k
    };
    let mut lo = *seq.iter().max().unwrap();
    let mut hi: u64 = seq.iter().sum();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if feasible(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

#[test]
fn heavy_stress_matches_binary_search() {
    let mut rng = StdRng::seed_from_u64(123);
    for &(n, k) in &[(500usize, 7usize), (1_500, 40), (2_000, 2)] {
        let seq: Vec<u64> = (0..n).map(|_| rng.gen_range(0..10_000)).collect();
        assert_eq!(solve(&seq, k).unwrap(), binary_search_baseline(&seq, k));
    }
}

#[test]
fn heavy_reconstruction_is_optimal() {
    let mut rng = StdRng::seed_from_u64(7);
    let seq: Vec<u64> = (0..1_000).map(|_| rng.gen_range(0..1_000)).collect();
    let result = PartitionSolver::new(&seq, 25).unwrap().run();
    assert_eq!(result.ranges.len(), 25);
    assert_eq!(result.sums.iter().max(), Some(&result.max_sum));
    assert_eq!(result.max_sum, binary_search_baseline(&seq, 25));
}
