#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The CMS request itself failed (network, TLS, non-2xx status).
    #[error("Content request failed: {0}")]
    Request(String),

    /// The CMS answered with a payload we could not interpret.
    #[error("Malformed content payload: {0}")]
    Decode(String),

    /// No published document of the requested type exists.
    #[error("No published document of type '{0}'")]
    NotFound(String),
}
