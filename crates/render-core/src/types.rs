use chrono::NaiveDateTime;
use cotizador_quote::{QuoteInput, QuoteResult};
use cotizador_types::PageSize;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// The configurable wording printed on a quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentLabels {
    pub title: String,
    pub summary_heading: String,
    pub footer_text: String,
    pub currency_symbol: String,
}

impl Default for DocumentLabels {
    fn default() -> Self {
        Self {
            title: "Cotización de Terreno".to_string(),
            summary_heading: "Resumen (modelo por factores)".to_string(),
            footer_text: "Desarrollado por M.Alfaro".to_string(),
            currency_symbol: "Q".to_string(),
        }
    }
}

/// Everything a backend needs to lay out one quote page.
#[derive(Debug, Clone, Copy)]
pub struct QuoteDocument<'a> {
    pub input: &'a QuoteInput,
    pub quote: &'a QuoteResult,
    pub generated_at: NaiveDateTime,
    pub labels: &'a DocumentLabels,
    pub page_size: PageSize,
}

/// Raw bytes of the logo asset (PNG, JPEG or GIF), still encoded.
#[derive(Debug, Clone)]
pub struct LogoImage {
    pub source: String,
    pub data: Arc<Vec<u8>>,
}

impl LogoImage {
    pub fn new(source: impl Into<String>, data: Arc<Vec<u8>>) -> Self {
        Self {
            source: source.into(),
            data,
        }
    }
}
