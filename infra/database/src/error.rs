use std::borrow::Cow;

/// Errors surfaced by the database layer.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Missing or inconsistent builder parameters.
    #[error("Database validation error: {message}")]
    Validation { message: Cow<'static, str> },
    /// The engine could not be reached or stayed unhealthy.
    #[error("Database connection error ({context}): {message}")]
    Connection { message: Cow<'static, str>, context: Cow<'static, str> },
    /// Root sign-in was rejected.
    #[error("Database auth error: {message}")]
    Auth { message: Cow<'static, str> },
    /// Any other engine-level failure.
    #[error("Database error: {source}")]
    Surreal {
        #[from]
        source: surrealdb::Error,
    },
    /// A seed operation failed while executing its script.
    #[error("Seed operation `{op}` failed: {source}")]
    Seed { op: &'static str, source: surrealdb::Error },
}
