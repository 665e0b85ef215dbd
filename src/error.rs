/// Failure modes of the two fetch collaborators.
///
/// Upstream failures keep the raw payload text so callers can display it
/// verbatim instead of a generic message. A requested FX symbol missing
/// from an otherwise good snapshot is not an error; it is logged per
/// symbol and processing continues.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("missing NEWSDATA API key")]
    MissingCredential,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned an error payload: {payload}")]
    Upstream { payload: String },
}

impl FetchError {
    /// The raw upstream payload, when there is one to display.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Upstream { payload } => Some(payload),
            _ => None,
        }
    }
}
