pub mod fixtures;
pub mod pdf_assertions;

use cotizador::{GenerationError, QuoteGenerator, QuoteInput};
use lopdf::Document as LopdfDocument;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Strings shown on the first page, in drawing order.
    pub fn texts(&self) -> Vec<String> {
        pdf_assertions::shown_text(&self.doc)
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    pub fn has_text(&self, expected: &str) -> bool {
        self.texts().iter().any(|t| t == expected)
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Runs `generator` and loads the result back with lopdf.
pub fn generate(
    generator: &QuoteGenerator,
    input: &QuoteInput,
) -> Result<GeneratedPdf, GenerationError> {
    let rendered = generator.generate(input)?;
    let doc = LopdfDocument::load_mem(&rendered.bytes)
        .map_err(|e| GenerationError::Config(format!("generated PDF does not parse: {}", e)))?;
    Ok(GeneratedPdf {
        bytes: rendered.bytes,
        file_name: rendered.file_name,
        doc,
    })
}
