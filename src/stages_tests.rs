use super::*;
use alloc::vec;
use alloc::vec::Vec;

fn collect_stage(n: usize, stage: usize) -> Vec<(usize, usize, usize)> {
    plan(n)
        .unwrap()
        .nth(stage - 1)
        .unwrap()
        .map(|u| (u.lo, u.hi, u.twiddle))
        .collect()
}

#[test]
fn test_stage_count() {
    for (n, stages) in [(2usize, 1usize), (4, 2), (8, 3), (1024, 10)] {
        let planned = plan(n).unwrap();
        assert_eq!(planned.len(), stages);
        assert_eq!(planned.count(), stages);
    }
}

#[test]
fn test_units_per_stage() {
    for n in [2usize, 4, 8, 64] {
        for units in plan(n).unwrap() {
            assert_eq!(units.len(), n / 2);
            assert_eq!(units.count(), n / 2);
        }
    }
}

#[test]
fn test_n8_stage1() {
    // Widest spacing, densest coefficients.
    assert_eq!(
        collect_stage(8, 1),
        vec![(0, 4, 0), (1, 5, 1), (2, 6, 2), (3, 7, 3)]
    );
}

#[test]
fn test_n8_stage2() {
    assert_eq!(
        collect_stage(8, 2),
        vec![(0, 2, 0), (1, 3, 2), (4, 6, 0), (5, 7, 2)]
    );
}

#[test]
fn test_n8_stage3() {
    // Adjacent pairs, all rotated by W^0.
    assert_eq!(
        collect_stage(8, 3),
        vec![(0, 1, 0), (2, 3, 0), (4, 5, 0), (6, 7, 0)]
    );
}

#[test]
fn test_n2_single_unit() {
    assert_eq!(collect_stage(2, 1), vec![(0, 1, 0)]);
}

#[test]
fn test_span_invariant() {
    for n in [2usize, 8, 32, 256] {
        for units in plan(n).unwrap() {
            let span = units.span();
            let stage = units.stage();
            assert_eq!(span, n >> stage);
            for u in units {
                assert_eq!(u.stage, stage);
                assert!(u.lo < u.hi);
                assert_eq!(u.hi - u.lo, span);
            }
        }
    }
}

#[test]
fn test_stage_partitions_all_signals() {
    // Every signal index is consumed by exactly one unit per stage.
    for n in [2usize, 4, 8, 64, 512] {
        for units in plan(n).unwrap() {
            let mut seen = vec![false; n];
            for u in units {
                assert!(!seen[u.lo], "index {} paired twice", u.lo);
                assert!(!seen[u.hi], "index {} paired twice", u.hi);
                seen[u.lo] = true;
                seen[u.hi] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }
}

#[test]
fn test_twiddle_indices_in_range_and_shared() {
    for n in [4usize, 8, 64] {
        for units in plan(n).unwrap() {
            let stage = units.stage();
            let span = units.span();
            for u in units.clone() {
                assert!(u.twiddle < n / 2);
                // Coefficient depends only on the offset within the block.
                assert_eq!(u.twiddle, (u.lo % (span << 1)) << (stage - 1));
            }
        }
    }
}

#[test]
fn test_total_unit_count() {
    for n in [2usize, 8, 128] {
        let total: usize = plan(n).unwrap().map(|units| units.count()).sum();
        assert_eq!(total, n / 2 * n.trailing_zeros() as usize);
    }
}

#[test]
fn test_restartable() {
    let units = plan(16).unwrap().next().unwrap();
    let mut consumed = units.clone();
    consumed.next();
    consumed.next();
    // Clones replay from the start regardless of prior consumption.
    let first: Vec<_> = units.clone().collect();
    let second: Vec<_> = units.collect();
    assert_eq!(first.len(), 8);
    assert_eq!(first, second);
}

#[test]
fn test_invalid_sizes() {
    assert!(matches!(plan(0), Err(ConfigError::SizeTooSmall)));
    assert!(matches!(plan(1), Err(ConfigError::SizeTooSmall)));
    assert!(matches!(plan(6), Err(ConfigError::NotPowerOfTwo)));
}
