//! Lot sale quotations.
//!
//! Computes the down payment, financed balance and monthly installment of a
//! lot sale from a fixed term-to-factor table, and renders the result onto a
//! single PDF page.
//!
//! ```no_run
//! use cotizador::{QuoteGenerator, QuoteInput};
//!
//! let generator = QuoteGenerator::builder().build()?;
//! let input = QuoteInput {
//!     client: "Ana Lopez".into(),
//!     advisor: "Luis Gómez".into(),
//!     ..Default::default()
//! };
//! let document = generator.generate(&input)?;
//! document.save_in(".")?;
//! # Ok::<(), cotizador::GenerationError>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;

pub use config::QuoteSettings;
pub use error::GenerationError;
pub use generator::{
    QuoteGenerator, QuoteGeneratorBuilder, QuoteSummary, RenderedDocument, suggested_file_name,
};

pub use cotizador_quote::{DownPayment, FACTOR_TABLE, QuoteError, QuoteInput, QuoteResult, Term};
pub use cotizador_render_core::{DocumentLabels, RenderError};
pub use cotizador_traits::{Clock, FixedClock, InMemoryResourceProvider, ResourceProvider, SystemClock};
pub use cotizador_resource::FilesystemResourceProvider;
pub use cotizador_types::PageSize;
