pub mod file;
pub mod generate;
pub mod project;

use axum::http::HeaderMap;

/// Default owner marker used when no identity header is present.
pub const ANONYMOUS_OWNER: &str = "anonymous";

/// Read the caller identity from the `X-User-Id` header.
///
/// This is the entire authentication model: no verification, anonymous
/// fallback when the header is absent or unreadable.
pub fn owner_id(headers: &HeaderMap) -> &str {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or(ANONYMOUS_OWNER)
}
