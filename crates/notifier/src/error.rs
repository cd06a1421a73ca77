use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Webhook returned an error: {0}")]
    ApiError(String),

    #[error("Recipient address '{0}' is not a plausible email address")]
    InvalidRecipient(String),
}
