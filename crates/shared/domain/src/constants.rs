//! Workspace-wide constants.

/// OpenAPI tag for system endpoints.
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for authentication endpoints.
pub const AUTH_TAG: &str = "Auth";

/// Route the client navigates to after a sign-out.
pub const LOGIN_PATH: &str = "/login";
