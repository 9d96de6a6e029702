//! Quote PDF renderer using lopdf.
//!
//! Lays out one quote on a single page with the base-14 Helvetica faces and
//! writes the file through [`StreamingPdfWriter`].

mod canvas;
mod layout;
mod logo;
mod renderer;
mod writer;

pub use canvas::PageCanvas;
pub use layout::QuoteLayout;
pub use renderer::LopdfQuoteRenderer;
pub use writer::StreamingPdfWriter;
