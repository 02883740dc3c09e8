#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat.empty_message")]
    EmptyMessage,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
