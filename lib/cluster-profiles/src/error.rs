use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProfileError>;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// A cluster without a valid bootstrap token cannot be joined by
    /// workers, so construction aborts instead of returning a partial
    /// blueprint.
    #[error("failed to acquire bootstrap token: {0}")]
    TokenAcquisition(anyhow::Error),
}
