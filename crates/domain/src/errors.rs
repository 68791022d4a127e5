use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid address block: {0}")]
    InvalidAddress(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("DNS resolution failed: {0}")]
    ResolutionFailed(String),
}
