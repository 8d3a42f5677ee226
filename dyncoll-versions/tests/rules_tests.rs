use dyncoll_types::SemanticVersion;
use dyncoll_versions::{
    CollectionStore, VersionError, VersionStore, suggest_next, validate_proposed,
};
use proptest::prelude::*;

fn v(s: &str) -> SemanticVersion {
    SemanticVersion::parse(s).unwrap()
}

#[test]
fn first_version_accepts_any_valid_number() {
    assert_eq!(validate_proposed("0.0.1", None), Ok(v("0.0.1")));
    assert_eq!(validate_proposed("7.3.0-beta", None), Ok(v("7.3.0-beta")));
}

#[test]
fn suggestion_starts_at_zero_then_increments_patch() {
    assert_eq!(suggest_next(None), Ok(v("0.0.0")));
    assert_eq!(suggest_next(Some(&v("0.0.1"))), Ok(v("0.0.2")));
    assert_eq!(suggest_next(Some(&v("1.4.0-rc.2"))), Ok(v("1.4.0")));
}

#[test]
fn no_suggestion_past_the_largest_patch() {
    let newest = SemanticVersion::new(2, 1, u64::MAX);
    let err = suggest_next(Some(&newest)).unwrap_err();
    assert_eq!(err, VersionError::NoPatchSuccessor(newest.to_string()));
    assert_eq!(
        err.to_string(),
        format!(
            "No patch version follows 2.1.{}; choose a higher minor or major version",
            u64::MAX
        )
    );
    assert!(validate_proposed("2.2.0", Some(&newest)).is_ok());
}

#[test]
fn invalid_numbers_are_rejected() {
    for input in ["", "1", "1.2", "one.two.three", "01.2.3", "1.2.3.4"] {
        let err = validate_proposed(input, None).unwrap_err();
        assert_eq!(err.to_string(), "Version number must be a valid semantic version");
    }
}

#[test]
fn older_number_is_rejected_with_newest_in_message() {
    let err = validate_proposed("1.0.0", Some(&v("1.2.0"))).unwrap_err();
    assert_eq!(
        err,
        VersionError::NotIncreasing {
            proposed: "1.0.0".into(),
            newest: "1.2.0".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "Version numbers must only increase; the most recent version is 1.2.0"
    );
}

fn version_string() -> impl Strategy<Value = String> {
    (0u64..4, 0u64..4, 0u64..4).prop_map(|(a, b, c)| format!("{a}.{b}.{c}"))
}

proptest! {
    /// Every accepted submission is strictly greater than all earlier
    /// accepted ones.
    #[test]
    fn accepted_versions_strictly_increase(
        submissions in prop::collection::vec(version_string(), 1..12),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            let store = CollectionStore::open_in_memory();
            let mut accepted: Vec<SemanticVersion> = Vec::new();
            for submission in &submissions {
                if let Ok(version) = store.create_version(submission).await {
                    if let Some(last) = accepted.last() {
                        prop_assert!(version.version > *last);
                    }
                    accepted.push(version.version);
                }
            }
            let stored = store.list_versions().await.unwrap();
            prop_assert_eq!(stored.len(), accepted.len());
            Ok(())
        })?;
    }
}
