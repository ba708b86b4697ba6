//! Header names and fixed values sent with every outbound request.

/// Header carrying the caller's API access token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Header identifying the requesting client.
pub const AUTH_CLIENT_HEADER: &str = "x-auth-client";

/// Header identifying the upstream surface being addressed.
pub const UPSTREAM_HEADER: &str = "x-bc-upstream";

/// Header carrying the CLI release version.
pub const CLI_VERSION_HEADER: &str = "stencil-cli";

/// Header carrying the stencil framework version the CLI targets.
pub const STENCIL_VERSION_HEADER: &str = "stencil-version";

/// Value of [`AUTH_CLIENT_HEADER`].
pub const AUTH_CLIENT: &str = "stencil-cli";

/// Value of [`UPSTREAM_HEADER`].
pub const UPSTREAM: &str = "storefront";
