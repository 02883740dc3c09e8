/// Errors raised by adapters that reach the remote shopping backend.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.transport")]
    Transport,
    #[error("gateway.unexpected_status")]
    UnexpectedStatus(u16),
    #[error("gateway.malformed_response")]
    MalformedResponse,
}

impl GatewayError {
    pub fn transport() -> Self {
        GatewayError::Transport
    }
    pub fn unexpected_status(status: u16) -> Self {
        GatewayError::UnexpectedStatus(status)
    }
    pub fn malformed_response() -> Self {
        GatewayError::MalformedResponse
    }
}

/// Repository errors for locally persisted state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.corrupted")]
    Corrupted,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn corrupted() -> Self {
        RepositoryError::Corrupted
    }
}
