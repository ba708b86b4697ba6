//! Composition of the identifying header set sent with every request.

use std::collections::HashMap;

use super::constants::{
    AUTH_CLIENT, AUTH_CLIENT_HEADER, AUTH_TOKEN_HEADER, CLI_VERSION_HEADER, STENCIL_VERSION_HEADER,
    UPSTREAM, UPSTREAM_HEADER,
};
use crate::package_info::PackageInfo;

/// Final merged header mapping sent with a request.
pub type HeaderSet = HashMap<String, String>;

/// Builds the header set for one outbound request.
///
/// Merge order, later stages winning on key collisions:
/// 1. `x-auth-token` when `access_token` is supplied
/// 2. identity and version defaults
/// 3. caller-supplied `headers`
///
/// Caller keys are lower-cased before the merge so that `X-Auth-Token` and
/// `x-auth-token` name the same entry; HTTP header names are case-insensitive.
#[must_use]
pub fn compose_headers(
    package: &PackageInfo,
    headers: Option<&HeaderSet>,
    access_token: Option<&str>,
) -> HeaderSet {
    let mut composed = HeaderSet::with_capacity(5 + headers.map_or(0, HashMap::len));

    if let Some(token) = access_token {
        composed.insert(AUTH_TOKEN_HEADER.to_string(), token.to_string());
    }

    composed.extend([
        (AUTH_CLIENT_HEADER.to_string(), AUTH_CLIENT.to_string()),
        (UPSTREAM_HEADER.to_string(), UPSTREAM.to_string()),
        (CLI_VERSION_HEADER.to_string(), package.version.clone()),
        (
            STENCIL_VERSION_HEADER.to_string(),
            package.config.stencil_version.clone(),
        ),
    ]);

    if let Some(overrides) = headers {
        composed.extend(
            overrides
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.clone())),
        );
    }

    composed
}
