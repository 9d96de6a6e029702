use crate::error::RenderError;
use crate::types::{LogoImage, QuoteDocument};
use std::io::{Seek, Write};

/// A backend that turns one quote into a finished single-page document.
pub trait DocumentRenderer<W: Write + Seek> {
    /// Lays out `document` and writes the complete file to `writer`,
    /// handing the writer back once the trailer is written. The logo is
    /// drawn when present; layout is identical without it.
    fn render(
        &self,
        document: &QuoteDocument<'_>,
        logo: Option<&LogoImage>,
        writer: W,
    ) -> Result<W, RenderError>;

    /// MIME type of the produced bytes.
    fn content_type(&self) -> &'static str;
}
