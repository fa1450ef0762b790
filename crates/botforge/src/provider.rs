//! The generative-text provider collaborator trait.

use std::time::Duration;

/// Errors a provider call can report.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The backend is unreachable, overloaded, or returned garbage.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The call exceeded the configured time budget.
    #[error("provider timed out after {0:?}")]
    Timeout(Duration),
}

/// A stateless text-for-prompt backend: the generative AI used for
/// casual chat and `askai`, and the joke source.
///
/// The core never retries a provider call and never lets one block a
/// room indefinitely — every call goes through
/// [`request_with_timeout`], and a failure surfaces as a user-visible
/// apology with all session state untouched.
pub trait TextProvider: Send + Sync + 'static {
    fn request(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<String, ProviderError>> + Send;
}

/// Calls the provider with a hard time budget.
pub(crate) async fn request_with_timeout<P: TextProvider>(
    provider: &P,
    prompt: &str,
    limit: Duration,
) -> Result<String, ProviderError> {
    match tokio::time::timeout(limit, provider.request(prompt)).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout(limit)),
    }
}
