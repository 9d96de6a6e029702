//! Core rendering abstractions for quote documents.
//!
//! - `DocumentRenderer` trait implemented by PDF backends
//! - `QuoteDocument`, the read-only view a backend lays out
//! - Number formatting for money, percentages and terms
//! - Standard-font metrics for right-aligned text

mod error;
pub mod format;
pub mod metrics;
mod traits;
mod types;

pub use error::RenderError;
pub use metrics::StandardFont;
pub use traits::DocumentRenderer;
pub use types::{DocumentLabels, LogoImage, QuoteDocument, PDF_CONTENT_TYPE};
