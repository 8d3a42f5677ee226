use dyncoll_types::{Error, SemanticVersion};
use proptest::prelude::*;

fn v(s: &str) -> SemanticVersion {
    SemanticVersion::parse(s).unwrap()
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parses_release_version() {
    let version = v("1.2.3");
    assert_eq!(version, SemanticVersion::new(1, 2, 3));
    assert_eq!(version.to_string(), "1.2.3");
}

#[test]
fn parses_prerelease_and_build() {
    let version = v("1.0.0-alpha.1+build.5");
    assert!(version < SemanticVersion::new(1, 0, 0));
    assert_eq!(version.to_string(), "1.0.0-alpha.1+build.5");
}

#[test]
fn normalizes_leading_v_and_whitespace() {
    assert_eq!(v(" v2.0.1 ").to_string(), "2.0.1");
    assert_eq!(v("=0.0.1").to_string(), "0.0.1");
}

#[test]
fn rejects_malformed_versions() {
    for bad in [
        "", "0", "1.2", "1.2.3.4", "01.2.3", "1.02.3", "a.b.c", "1.2.3-", "1.2.3+",
        "1.2.3-alpha..1", "1.2.3-01", "-1.2.3",
    ] {
        assert_eq!(
            SemanticVersion::parse(bad),
            Err(Error::InvalidVersion(bad.to_string())),
            "{bad:?} should be invalid"
        );
    }
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn core_fields_order_numerically() {
    assert!(v("1.2.0") > v("1.1.9"));
    assert!(v("1.10.0") > v("1.9.0"));
    assert!(v("2.0.0") > v("1.99.99"));
}

#[test]
fn release_outranks_prerelease() {
    assert!(v("1.0.0") > v("1.0.0-rc.1"));
    assert!(v("1.0.0-alpha") < v("1.0.0-alpha.1"));
    assert!(v("1.0.0-alpha.1") < v("1.0.0-alpha.beta"));
    assert!(v("1.0.0-beta.2") < v("1.0.0-beta.11"));
}

#[test]
fn build_metadata_is_ignored_for_equality() {
    assert_eq!(v("1.0.0+a"), v("1.0.0+b"));
}

// ── Increment ────────────────────────────────────────────────────

#[test]
fn increment_patch_of_release() {
    assert_eq!(v("0.0.1").increment_patch(), Some(v("0.0.2")));
    assert_eq!(
        v("1.2.9+meta").increment_patch().map(|next| next.to_string()),
        Some("1.2.10".to_string())
    );
}

#[test]
fn increment_patch_of_prerelease_releases_it() {
    assert_eq!(v("1.2.3-beta.1").increment_patch(), Some(v("1.2.3")));
}

#[test]
fn increment_patch_at_max_has_no_successor() {
    assert_eq!(SemanticVersion::new(1, 0, u64::MAX).increment_patch(), None);
    let prerelease = v(&format!("1.0.{}-rc.1", u64::MAX));
    assert_eq!(
        prerelease.increment_patch(),
        Some(SemanticVersion::new(1, 0, u64::MAX))
    );
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serde_uses_string_form() {
    let json = serde_json::to_string(&v("3.1.4")).unwrap();
    assert_eq!(json, "\"3.1.4\"");
    let back: SemanticVersion = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v("3.1.4"));
    assert!(serde_json::from_str::<SemanticVersion>("\"3.1\"").is_err());
}

proptest! {
    #[test]
    fn increment_is_strictly_greater(
        major in 0u64..1000,
        minor in 0u64..1000,
        patch in 0u64..1000,
    ) {
        let version = SemanticVersion::new(major, minor, patch);
        prop_assert!(version.increment_patch().unwrap() > version);
    }

    #[test]
    fn display_parse_roundtrip(major in 0u64..1000, minor in 0u64..1000, patch in 0u64..1000) {
        let version = SemanticVersion::new(major, minor, patch);
        prop_assert_eq!(SemanticVersion::parse(&version.to_string()).unwrap(), version);
    }
}
