use thiserror::Error;

/// Ways a call to the completion service can fail.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("could not reach completion service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion service returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("unexpected completion response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("paragraph is empty")]
    EmptyParagraph,

    #[error(transparent)]
    Completion(#[from] CompletionError),
}
