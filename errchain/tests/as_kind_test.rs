// Type-directed extraction of domain kinds from a chain

use errchain::{find_hoge, find_something, ErrorRecord, NotFoundError, UnknownError, WrapContext};
use errchain_core::{as_kind, find_kind, ChainSnapshot};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_as_extracts_kind() {
    let err = find_hoge().unwrap_err();
    let not_found = as_kind::<NotFoundError>(&err);

    assert_eq!(not_found.map(|e| e.cause.as_str()), Some("i dont know"));
}

#[test]
fn test_as_extracts_kind_from_wrapped() {
    let err = find_hoge().unwrap_err();
    let wrapped = ErrorRecord::wrap("wrapping error", err);

    let not_found = as_kind::<NotFoundError>(&wrapped);
    assert!(not_found.is_some());
    assert_eq!(
        not_found.map(|e| e.to_string()),
        Some("not found error: i dont know".to_string())
    );
    assert_eq!(wrapped.to_string(), "wrapping error: not found error: i dont know");
}

#[test]
fn test_as_fails_for_other_kind() {
    let err = find_something().unwrap_err();
    let (not_found, found) = find_kind::<NotFoundError>(&err);

    assert!(!found);
    assert!(not_found.is_none());
}

#[test]
fn test_as_fails_for_other_kind_when_wrapped() {
    let wrapped = find_something().wrap_err("wrap").unwrap_err();

    assert_eq!(wrapped.to_string(), "wrap: unknown error");
    assert!(as_kind::<NotFoundError>(&wrapped).is_none());
    assert_eq!(
        as_kind::<UnknownError>(&wrapped),
        Some(&UnknownError {
            err: "unknown error".to_string()
        })
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(5)]
fn test_as_at_depth(#[case] layers: usize) {
    let mut err = find_hoge().unwrap_err();
    for n in 0..layers {
        err = ErrorRecord::wrap(format!("layer {}", n), err);
    }

    let (not_found, found) = find_kind::<NotFoundError>(&err);
    assert!(found);
    assert_eq!(not_found.map(|e| e.err.as_str()), Some("not found error"));
    assert!(as_kind::<UnknownError>(&err).is_none());
}

#[test]
fn test_as_ignores_matching_text() {
    let real = find_hoge().unwrap_err();
    let lookalike = ErrorRecord::new(format!("wrapping error: {}", real));

    assert_eq!(lookalike.to_string(), "wrapping error: not found error: i dont know");
    assert!(as_kind::<NotFoundError>(&lookalike).is_none());
    assert!(!lookalike.is(&real));
}

#[test]
fn test_first_matching_kind_wins() {
    let inner = find_hoge().unwrap_err();
    let outer = ErrorRecord::wrap_kind(
        NotFoundError {
            err: "profile missing".to_string(),
            cause: "lookup failed".to_string(),
        },
        inner,
    );

    assert_eq!(
        as_kind::<NotFoundError>(&outer).map(|e| e.cause.as_str()),
        Some("lookup failed")
    );
    assert_eq!(
        outer.to_string(),
        "profile missing: lookup failed: not found error: i dont know"
    );
}

#[test]
fn test_snapshot_names_kinds() {
    let wrapped = find_hoge().wrap_err("wrapping error").unwrap_err();
    let snapshot = ChainSnapshot::capture(&wrapped);

    assert_eq!(snapshot.depth, 2);
    assert_eq!(snapshot.kinds[0], None);
    assert!(snapshot.kinds[1]
        .as_deref()
        .is_some_and(|kind| kind.ends_with("NotFoundError")));
}

#[test]
fn test_anyhow_downcast_reaches_kind() {
    fn handler() -> anyhow::Result<()> {
        find_hoge().wrap_err("handler")?;
        Ok(())
    }

    let err = handler().unwrap_err();
    let record = err.downcast_ref::<ErrorRecord>();
    assert_eq!(
        record
            .and_then(|r| r.as_kind::<NotFoundError>())
            .map(|e| e.cause.as_str()),
        Some("i dont know")
    );
}
