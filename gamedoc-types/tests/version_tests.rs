use gamedoc_types::DocumentVersion;
use proptest::prelude::*;

// ── Construction & display ───────────────────────────────────────

#[test]
fn new_from_components() {
    let v = DocumentVersion::new(4, 0, 98, 1);
    assert_eq!(v.major, 4);
    assert_eq!(v.minor, 0);
    assert_eq!(v.build, 98);
    assert_eq!(v.revision, 1);
}

#[test]
fn display_and_parse() {
    let v = DocumentVersion::new(0, 3, 4, 73);
    assert_eq!(v.to_string(), "0.3.4.73");
    assert_eq!("0.3.4.73".parse::<DocumentVersion>().unwrap(), v);
}

#[test]
fn serde_roundtrip() {
    let v = DocumentVersion::new(4, 0, 98, 0);
    let json = serde_json::to_string(&v).unwrap();
    let parsed: DocumentVersion = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, v);
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn ordering_by_major_first() {
    assert!(DocumentVersion::new(5, 0, 0, 0) > DocumentVersion::new(4, 9, 99, 99));
}

#[test]
fn ordering_falls_through_to_revision() {
    let a = DocumentVersion::new(4, 0, 98, 0);
    let b = DocumentVersion::new(4, 0, 98, 1);
    assert!(a < b);
    assert!(b.is_newer_than(&a));
    assert!(a.is_older_or_equal(&b));
}

#[test]
fn older_or_equal_includes_threshold() {
    let threshold = DocumentVersion::new(4, 0, 98, 0);
    assert!(threshold.is_older_or_equal(&threshold));
    assert!(!DocumentVersion::new(4, 0, 99, 0).is_older_or_equal(&threshold));
}

fn version_strategy() -> impl Strategy<Value = DocumentVersion> {
    (0u32..6, 0u32..6, 0u32..120, 0u32..4)
        .prop_map(|(major, minor, build, revision)| DocumentVersion::new(major, minor, build, revision))
}

proptest! {
    /// Ordering matches the ordering of the component tuples.
    #[test]
    fn ordering_is_lexicographic(a in version_strategy(), b in version_strategy()) {
        let ta = (a.major, a.minor, a.build, a.revision);
        let tb = (b.major, b.minor, b.build, b.revision);
        prop_assert_eq!(a.cmp(&b), ta.cmp(&tb));
    }

    #[test]
    fn display_parse_roundtrip(v in version_strategy()) {
        prop_assert_eq!(v.to_string().parse::<DocumentVersion>().unwrap(), v);
    }
}
