// src/error.rs
use cotizador_quote::QuoteError;
use cotizador_render_core::RenderError;
use thiserror::Error;

/// Everything that can stop a quote from being generated.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid quote: {0}")]
    Validation(String),

    #[error("Quote calculation failed: {0}")]
    Quote(#[from] QuoteError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GenerationError {
    fn from(e: serde_json::Error) -> Self {
        GenerationError::Config(e.to_string())
    }
}
