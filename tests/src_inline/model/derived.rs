use super::*;

fn snapshot(calls: u64, gk: u64, dm: u64, emails: u64, opened: u64, responses: u64) -> MetricsSnapshot {
    MetricsSnapshot {
        total_calls: calls,
        gatekeepers: gk,
        decision_makers: dm,
        total_emails: emails,
        emails_opened: opened,
        email_responses: responses,
        highlights: vec!["h".to_string()],
    }
}

#[test]
fn test_default_snapshot_ratios() {
    let out = derive_metrics(&MetricsSnapshot::default());
    assert_eq!(out.call_penetration, 30.7);
    assert_eq!(out.dm_conversion, 0.6);
    assert_eq!(out.email_open_rate, 13.9);
    assert_eq!(out.email_reply_rate, 0.0);
}

#[test]
fn test_zero_denominators_fall_back_to_zero() {
    let out = derive_metrics(&snapshot(0, 0, 0, 0, 0, 0));
    assert_eq!(out, DerivedMetrics::default());

    let out = derive_metrics(&snapshot(0, 5, 1, 10, 4, 1));
    assert_eq!(out.call_penetration, 0.0);
    assert_eq!(out.dm_conversion, 0.0);
    assert_eq!(out.email_open_rate, 40.0);
    assert_eq!(out.email_reply_rate, 10.0);
}

#[test]
fn test_rounding_half_away_from_zero() {
    assert_eq!(percent_1dp(1, 16), 6.3);
    assert_eq!(percent_1dp(1, 8), 12.5);
    assert_eq!(percent_1dp(1, 2000), 0.1);
    assert_eq!(percent_1dp(1, 2001), 0.0);
    assert_eq!(percent_1dp(2, 3), 66.7);
    assert_eq!(percent_1dp(1, 3), 33.3);
}

#[test]
fn test_ratios_stay_within_percent_range() {
    let out = derive_metrics(&snapshot(10, 25, 10, 4, 9, 4));
    assert_eq!(out.call_penetration, 100.0);
    assert_eq!(out.dm_conversion, 100.0);
    assert_eq!(out.email_open_rate, 100.0);
    assert_eq!(out.email_reply_rate, 100.0);

    for whole in 1..50u64 {
        for part in 0..=whole {
            let v = percent_1dp(part, whole);
            assert!((0.0..=100.0).contains(&v), "{part}/{whole} -> {v}");
            assert_eq!((v * 10.0).round() / 10.0, v);
        }
    }
}

#[test]
fn test_large_counts_do_not_overflow() {
    assert_eq!(percent_1dp(u64::MAX, u64::MAX), 100.0);
    assert_eq!(percent_1dp(u64::MAX / 2, u64::MAX), 50.0);
}

#[test]
fn test_formatted_has_one_decimal() {
    let out = derive_metrics(&snapshot(100, 50, 0, 3, 1, 0)).formatted();
    assert_eq!(out.call_penetration, "50.0");
    assert_eq!(out.dm_conversion, "0.0");
    assert_eq!(out.email_open_rate, "33.3");
    assert_eq!(out.email_reply_rate, "0.0");
}
