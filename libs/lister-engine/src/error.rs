use lister_api::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("invalid bound {bound}: must be a positive integer")]
    InvalidArgument { bound: i64 },

    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] StoreError),
}

impl ListError {
    /// Caller misuse, as opposed to a store failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ListError::InvalidArgument { .. })
    }
}
