//! Snapshot of the environment variables the entrypoint renders from.

use crate::error::EntrypointError;

/// Base URL of the FUM API, exposed to the frontend.
pub const FUM_BASEURL: &str = "FUM_BASEURL";
/// Base URL of the avatar service, exposed to the frontend.
pub const AVATAR_BASEURL: &str = "AVATAR_BASEURL";
/// Base URL of the contacts API, substituted into the nginx config.
pub const CONTACTS_BASEURL: &str = "CONTACTS_BASEURL";

/// Immutable values of the three required variables, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    pub fum_baseurl: String,
    pub avatar_baseurl: String,
    pub contacts_baseurl: String,
}

/// Read the snapshot from the process environment.
///
/// # Errors
///
/// Returns [`EntrypointError::MissingConfiguration`] naming the first variable
/// that is unset, empty, or not valid unicode. Any other value, whitespace
/// included, is kept verbatim.
pub fn load_environment() -> Result<EnvironmentSnapshot, EntrypointError> {
    load_environment_with(|key| std::env::var(key).ok())
}

/// Read the snapshot through `lookup`, which returns `None` for unset keys.
pub fn load_environment_with<F>(lookup: F) -> Result<EnvironmentSnapshot, EntrypointError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &'static str| match lookup(key) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(EntrypointError::MissingConfiguration { key }),
    };

    Ok(EnvironmentSnapshot {
        fum_baseurl: required(FUM_BASEURL)?,
        avatar_baseurl: required(AVATAR_BASEURL)?,
        contacts_baseurl: required(CONTACTS_BASEURL)?,
    })
}
