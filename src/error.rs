/// Errors raised while constructing or invoking a job handler.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// User-facing failure. The runner reports the message and exits with
    /// the failure code.
    #[error("{0}")]
    Localized(String),

    /// The constructor has no way to build the requested instance.
    #[error("cannot construct `{instance}`: {reason}")]
    NotConstructible { instance: String, reason: String },

    /// Anything else. Never caught by the runner.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl JobError {
    pub fn localized(msg: impl Into<String>) -> Self {
        JobError::Localized(msg.into())
    }
}
