//! Rendering of the two startup artefacts.
//!
//! - The frontend config document is served statically and fetched by the
//!   browser app on load.
//! - The server config is the nginx template with the contacts upstream
//!   filled in.

use serde::{Deserialize, Serialize};

use crate::{env::EnvironmentSnapshot, error::EntrypointError};

/// Token in the nginx template replaced by `CONTACTS_BASEURL`.
pub const PLACEHOLDER: &str = "$contacts_api_baseurl";

// ---------------------------------------------------------------------------
// Frontend config
// ---------------------------------------------------------------------------

/// Body of `config.json` as fetched by the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontendConfig {
    #[serde(rename = "FUM_BASEURL")]
    pub fum_baseurl: String,
    #[serde(rename = "AVATAR_BASEURL")]
    pub avatar_baseurl: String,
}

impl From<&EnvironmentSnapshot> for FrontendConfig {
    fn from(env: &EnvironmentSnapshot) -> Self {
        Self {
            fum_baseurl: env.fum_baseurl.clone(),
            avatar_baseurl: env.avatar_baseurl.clone(),
        }
    }
}

/// Serialise the frontend config document as a single line of JSON.
///
/// # Errors
///
/// Returns [`EntrypointError::Render`] if encoding fails.
pub fn render_frontend_config(env: &EnvironmentSnapshot) -> Result<Vec<u8>, EntrypointError> {
    Ok(serde_json::to_vec(&FrontendConfig::from(env))?)
}

// ---------------------------------------------------------------------------
// Server config
// ---------------------------------------------------------------------------

/// Replace every literal [`PLACEHOLDER`] in `template` with `contacts_baseurl`.
///
/// A template without the placeholder is returned unchanged. Inserted text is
/// never re-scanned.
pub fn render_server_config(template: &str, contacts_baseurl: &str) -> String {
    template.replace(PLACEHOLDER, contacts_baseurl)
}
