/// Remote product store errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.fetch")]
    Fetch,
    #[error("store.not_found")]
    NotFound,
    #[error("store.rejected")]
    Rejected,
    #[error("store.malformed_response")]
    MalformedResponse,
}
