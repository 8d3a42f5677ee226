use crate::error::VersionError;
use dyncoll_model::Version;
use dyncoll_types::SemanticVersion;

/// The version with the highest semantic version number.
pub fn newest<'a>(versions: impl IntoIterator<Item = &'a Version>) -> Option<&'a Version> {
    versions.into_iter().max_by(|a, b| a.version.cmp(&b.version))
}

/// Default value offered for the next version: `0.0.0` when none exist,
/// otherwise the newest version with its patch incremented.
pub fn suggest_next(newest: Option<&SemanticVersion>) -> Result<SemanticVersion, VersionError> {
    match newest {
        Some(version) => version
            .increment_patch()
            .ok_or_else(|| VersionError::NoPatchSuccessor(version.to_string())),
        None => Ok(SemanticVersion::new(0, 0, 0)),
    }
}

/// Accepts `proposed` only if it is a valid semantic version strictly
/// greater than `newest`. With no prior version any valid number is accepted.
pub fn validate_proposed(
    proposed: &str,
    newest: Option<&SemanticVersion>,
) -> Result<SemanticVersion, VersionError> {
    let version = SemanticVersion::parse(proposed)
        .map_err(|_| VersionError::Invalid(proposed.to_string()))?;

    match newest {
        Some(newest) if version <= *newest => Err(VersionError::NotIncreasing {
            proposed: version.to_string(),
            newest: newest.to_string(),
        }),
        _ => Ok(version),
    }
}
