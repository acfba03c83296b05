//! Extractor that validates the `x-version` request header.

use super::RejectionType;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use semver::Version;
use service::config::{ApiVersion, Config};

/// Rejects requests whose `x-version` header is missing, malformed, or not a
/// version this build serves. Controllers take it as their first argument so
/// the check runs before any work happens.
pub(crate) struct CompareApiVersion(pub Version);

impl<S> FromRequestParts<S> for CompareApiVersion
where
    S: Send + Sync,
{
    type Rejection = RejectionType;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(ApiVersion::field_name()).ok_or((
            StatusCode::BAD_REQUEST,
            format!("Missing required {} header", ApiVersion::field_name()),
        ))?;

        let version_str = header.to_str().map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                format!("Invalid {} header value", ApiVersion::field_name()),
            )
        })?;

        if !Config::supported_api_version(version_str) {
            return Err((
                StatusCode::BAD_REQUEST,
                format!("Unsupported API version: {version_str}"),
            ));
        }

        let version = Version::parse(version_str).map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                format!("Invalid semantic version: {version_str}"),
            )
        })?;

        Ok(CompareApiVersion(version))
    }
}
