use super::*;

#[test]
fn pinned_bits_match_reference_values() {
    assert_eq!(hash_bits(0, 0, 0), 0);
    assert_eq!(hash_bits(1, 0, 0), 68_841_942);
    assert_eq!(hash_bits(0, 1, 0), 4_194_608_165);
    assert_eq!(hash_bits(0, 0, 1), 2_643_853_948);
    assert_eq!(hash_bits(17, 42, 711), 2_055_647_289);
    assert_eq!(hash_bits(-5, -9, 3), 3_814_200_551);
    assert_eq!(hash_bits(1599, 899, 2016), 750_569_111);
}

#[test]
fn normalizes_by_u32_max() {
    let v = hash_noise(1, 0, 0);
    assert_eq!(v, 68_841_942.0 / 4_294_967_295.0);
    assert!((v - 0.016_028_513_669_974_29).abs() < 1e-15);
}

#[test]
fn same_arguments_same_value() {
    for (x, y, s) in [(3, 4, 5), (-100, 7, 0), (i64::MAX, i64::MIN, -1)] {
        assert_eq!(hash_noise(x, y, s).to_bits(), hash_noise(x, y, s).to_bits());
    }
}

#[test]
fn varying_any_argument_changes_value() {
    let base = hash_noise(10, 20, 30);
    assert_ne!(base, hash_noise(11, 20, 30));
    assert_ne!(base, hash_noise(10, 21, 30));
    assert_ne!(base, hash_noise(10, 20, 31));
}

#[test]
fn outputs_lie_in_unit_interval() {
    for y in -16..48 {
        for x in -16..48 {
            let v = hash_noise(x, y, 433);
            assert!((0.0..1.0).contains(&v), "out of range at ({x},{y}): {v}");
        }
    }
}

#[test]
fn extreme_inputs_do_not_overflow() {
    let v = hash_noise(i64::MAX, i64::MAX, i64::MAX);
    assert!((0.0..1.0).contains(&v));
    let v = hash_noise(i64::MIN, i64::MIN, i64::MIN);
    assert!((0.0..1.0).contains(&v));
}

#[test]
fn noise_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| std::thread::spawn(move || hash_noise(t, t * 2, 99)))
        .collect();
    for (t, h) in handles.into_iter().enumerate() {
        let t = t as i64;
        assert_eq!(h.join().unwrap(), hash_noise(t, t * 2, 99));
    }
}
