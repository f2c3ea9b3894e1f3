use super::*;

#[test]
fn test_header_index_normalizes_and_keeps_first() {
    let header = HeaderIndex::from_cells(&[" TotalCalls ", "GATEKEEPERS", "totalcalls", "notes"]);
    assert_eq!(header.position("totalcalls"), Some(0));
    assert_eq!(header.position("gatekeepers"), Some(1));
    assert_eq!(header.position("notes"), Some(3));
    assert_eq!(header.position("highlights"), None);
    assert_eq!(header.recognized(), 2);
}

#[test]
fn test_cell_beyond_short_row_is_absent() {
    let header = HeaderIndex::from_cells(&["a", "totalcalls"]);
    assert_eq!(header.cell("totalcalls", &["1"]), None);
    assert_eq!(header.cell("totalcalls", &["1", "2"]), Some("2"));
}

#[test]
fn test_parse_count() {
    assert_eq!(parse_count("42"), Some(42));
    assert_eq!(parse_count(" 7 "), Some(7));
    assert_eq!(parse_count("0"), Some(0));
    assert_eq!(parse_count(""), None);
    assert_eq!(parse_count("-3"), None);
    assert_eq!(parse_count("12abc"), None);
    assert_eq!(parse_count("1.5"), None);
}

#[test]
fn test_lenient_merge_keeps_prior_on_bad_cells() {
    let prior = MetricsSnapshot::default();
    let header = HeaderIndex::from_cells(&["totalCalls", "gatekeepers", "highlights"]);
    let merged = merge_row(&header, &["oops", "50", ""], &prior, false).unwrap();
    assert_eq!(merged.total_calls, prior.total_calls);
    assert_eq!(merged.gatekeepers, 50);
    assert_eq!(merged.highlights, prior.highlights);
}

#[test]
fn test_strict_merge_rejects_bad_cell() {
    let prior = MetricsSnapshot::default();
    let header = HeaderIndex::from_cells(&["totalCalls", "gatekeepers"]);
    let err = merge_row(&header, &["100", "n/a"], &prior, true).unwrap_err();
    match err {
        ImportError::InvalidField { field, value } => {
            assert_eq!(field, "gatekeepers");
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_strict_merge_allows_empty_cells() {
    let prior = MetricsSnapshot::default();
    let header = HeaderIndex::from_cells(&["totalCalls", "gatekeepers"]);
    let merged = merge_row(&header, &["100", ""], &prior, true).unwrap();
    assert_eq!(merged.total_calls, 100);
    assert_eq!(merged.gatekeepers, prior.gatekeepers);
}

#[test]
fn test_zero_is_a_valid_count() {
    let prior = MetricsSnapshot::default();
    let header = HeaderIndex::from_cells(&["decisionMakers"]);
    let merged = merge_row(&header, &["0"], &prior, false).unwrap();
    assert_eq!(merged.decision_makers, 0);
}

#[test]
fn test_every_count_field_has_distinct_slot() {
    let mut snap = MetricsSnapshot::default();
    for (i, field) in CountField::ALL.iter().enumerate() {
        *field.slot(&mut snap) = 1000 + i as u64;
        assert_eq!(normalize_header(field.header()), field.key());
    }
    assert_eq!(snap.total_calls, 1000);
    assert_eq!(snap.gatekeepers, 1001);
    assert_eq!(snap.decision_makers, 1002);
    assert_eq!(snap.total_emails, 1003);
    assert_eq!(snap.emails_opened, 1004);
    assert_eq!(snap.email_responses, 1005);
}
