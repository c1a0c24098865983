use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum P4pError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// An authenticated probe was answered with a redirect to the login page.
    #[error("not logged in")]
    NotLoggedIn,

    /// The login page did not contain an expected hidden form field.
    ///
    /// Usually means the provider changed its login markup, or an error page
    /// was returned instead of the form.
    #[error("login page did not match: missing hidden field `{0}`")]
    BodyNotMatched(&'static str),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Report parameters could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
