use consumption_stats::stats::{self, StatsError};

const SERIES: [f64; 7] = [3.25, -1.5, 8.0, 0.1, 0.1, 42.0, 7.75];

/// Deterministic permutations of SERIES: every rotation, forwards and reversed.
fn permutations() -> Vec<Vec<f64>> {
    let mut out = Vec::new();
    for k in 0..SERIES.len() {
        let mut v = SERIES.to_vec();
        v.rotate_left(k);
        out.push(v.clone());
        v.reverse();
        out.push(v);
    }
    out
}

#[test]
fn mean_and_median_ignore_order() {
    let mean = stats::mean(&SERIES).unwrap();
    let median = stats::median(&SERIES).unwrap();
    for p in permutations() {
        assert_eq!(stats::mean(&p).unwrap(), mean, "{p:?}");
        assert_eq!(stats::median(&p).unwrap(), median, "{p:?}");
    }
    assert_eq!(median, 3.25);
}

#[test]
fn variance_is_never_negative() {
    for p in permutations() {
        assert!(stats::variance(&p).unwrap() >= 0.0);
    }
    assert!(stats::variance(&[1e-300, -1e-300]).unwrap() >= 0.0);
}

#[test]
fn variance_is_zero_only_for_constant_series() {
    assert_eq!(stats::variance(&[0.3; 9]).unwrap(), 0.0);
    assert_eq!(stats::variance(&[-4.0]).unwrap(), 0.0);
    assert!(stats::variance(&[0.3, 0.3, 0.30000000000000004]).unwrap() > 0.0);
    assert!(stats::variance(&SERIES).unwrap() > 0.0);
}

#[test]
fn any_single_value_has_no_stdev() {
    for v in SERIES {
        assert_eq!(stats::stdev(&[v]), Err(StatsError::DivisionByZero));
    }
}

#[test]
fn repeated_calls_agree() {
    assert_eq!(stats::range_of(&SERIES), stats::range_of(&SERIES));
    assert_eq!(stats::mean(&SERIES), stats::mean(&SERIES));
    assert_eq!(stats::mode(&SERIES), stats::mode(&SERIES));
    assert_eq!(stats::median(&SERIES), stats::median(&SERIES));
    assert_eq!(stats::variance(&SERIES), stats::variance(&SERIES));
    assert_eq!(stats::stdev(&SERIES), stats::stdev(&SERIES));
}

#[test]
fn mode_of_mixed_series_picks_repeated_value() {
    assert_eq!(stats::mode(&SERIES), Ok(0.1));
}
