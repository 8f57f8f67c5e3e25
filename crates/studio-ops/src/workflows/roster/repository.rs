use super::domain::{TalentId, TalentProfile};

/// Storage abstraction over the hosted data store so workflow code can be
/// exercised against in-memory doubles.
pub trait TalentRepository: Send + Sync {
    fn insert(&self, profile: TalentProfile) -> Result<TalentProfile, RepositoryError>;
    fn update(&self, profile: TalentProfile) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &TalentId) -> Result<Option<TalentProfile>, RepositoryError>;
    fn list(&self) -> Result<Vec<TalentProfile>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
