use std::borrow::Cow;

/// Errors surfaced by the identity slice.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// Configuration errors for identity/authentication.
    #[error("Identity config error: {message}")]
    Config { message: Cow<'static, str> },
    /// Authentication failures.
    #[error("Identity auth error: {message}")]
    Auth { message: Cow<'static, str> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal identity error: {message}")]
    Internal { message: Cow<'static, str> },
}
