//! Octocrab client construction for the search gateway.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::FeedError;
use crate::github::locator::{ApiBase, PersonalAccessToken};

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client for the API base, authenticated when a token is
/// supplied and anonymous otherwise.
///
/// # Errors
///
/// Returns `FeedError::InvalidUrl` when the base URI cannot be parsed or
/// `FeedError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: Option<&PersonalAccessToken>,
    api_base: &ApiBase,
) -> Result<Octocrab, FeedError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| FeedError::InvalidUrl(error.to_string()))?;

    let mut builder = Octocrab::builder();
    if let Some(personal_token) = token {
        builder = builder.personal_token(personal_token.value());
    }

    builder
        .base_uri(base_uri)
        .map_err(|error| FeedError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
