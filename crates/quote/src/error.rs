use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    #[error("Unsupported financing term: {0} years (expected 4 to 10)")]
    UnsupportedTerm(u32),

    #[error("Invalid quote input: {0}")]
    InvalidInput(String),
}
