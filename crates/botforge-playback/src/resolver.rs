//! The media resolution collaborator trait.

use crate::Track;

/// Errors the resolver can report.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Nothing matched the query.
    #[error("no media found for the query")]
    NotFound,

    /// The resolution backend is unreachable or failed.
    /// The user may simply retry; no session state is touched.
    #[error("media resolution unavailable: {0}")]
    Unavailable(String),
}

/// Resolves a free-form query ("song title", a URL) into a playable
/// [`Track`].
///
/// Stateless request/response: the core calls this before `enqueue` and
/// never caches or retries on its own.
pub trait MediaResolver: Send + Sync + 'static {
    fn resolve(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<Track, ResolveError>> + Send;
}
