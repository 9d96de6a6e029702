// src/generator.rs
use crate::config::QuoteSettings;
use crate::error::GenerationError;
use cotizador_quote::{QuoteInput, QuoteResult};
use cotizador_render_core::{DocumentRenderer, LogoImage, QuoteDocument, format};
use cotizador_render_lopdf::LopdfQuoteRenderer;
use cotizador_resource::FilesystemResourceProvider;
use cotizador_traits::{Clock, ResourceProvider, SystemClock};
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A finished quote page, ready to be saved or served.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: &'static str,
    pub quote: QuoteResult,
}

impl RenderedDocument {
    /// Writes the document into `dir` under its suggested file name.
    pub fn save_in<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, GenerationError> {
        let path = dir.as_ref().join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Builds the download name for a quote: `<prefix>_<lot>_<client>.pdf`.
///
/// Lot and client are trimmed and every whitespace character becomes `_`.
/// Path separators are replaced too so the name always stays a single path
/// component.
pub fn suggested_file_name(prefix: &str, lot: &str, client: &str) -> String {
    fn component(value: &str) -> String {
        value
            .trim()
            .chars()
            .map(|c| {
                if c.is_whitespace() || c == '/' || c == '\\' {
                    '_'
                } else {
                    c
                }
            })
            .collect()
    }
    format!("{}_{}_{}.pdf", prefix, component(lot), component(client))
}

/// The figures of a quote without the page, as shown by the CLI.
#[derive(Debug, Clone)]
pub struct QuoteSummary {
    pub input: QuoteInput,
    pub quote: QuoteResult,
    currency_symbol: String,
}

impl fmt::Display for QuoteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let money = |v: f64| format::money(&self.currency_symbol, v);
        writeln!(
            f,
            "Lote {} ({})",
            self.input.lot,
            format::area(self.input.area_m2)
        )?;
        writeln!(f, "Precio base:        {}", money(self.quote.base_price))?;
        writeln!(
            f,
            "Enganche:           {}  ({})",
            money(self.quote.down_payment_amount),
            format::percentage(self.quote.down_payment_percentage)
        )?;
        writeln!(f, "Saldo a financiar:  {}", money(self.quote.balance))?;
        writeln!(f, "Plazo:              {}", format::term(self.quote.term))?;
        writeln!(f, "Cuota mensual:      {}", money(self.quote.monthly_payment))?;
        write!(
            f,
            "Total en cuotas:    {}",
            money(self.quote.total_of_installments())
        )
    }
}

/// Turns quote inputs into rendered PDF pages.
///
/// Holds the settings, the asset store used to find the logo and the clock
/// that stamps each page. Create one with [`QuoteGeneratorBuilder`].
pub struct QuoteGenerator {
    settings: QuoteSettings,
    resources: Arc<dyn ResourceProvider>,
    clock: Arc<dyn Clock>,
    renderer: LopdfQuoteRenderer,
}

impl QuoteGenerator {
    pub fn builder() -> QuoteGeneratorBuilder {
        QuoteGeneratorBuilder::new()
    }

    pub fn settings(&self) -> &QuoteSettings {
        &self.settings
    }

    /// Computes the figures of a quote without rendering anything.
    pub fn summarize(&self, input: &QuoteInput) -> Result<QuoteSummary, GenerationError> {
        let input = input.trimmed();
        input.check_figures()?;
        let quote = input.quote();
        Ok(QuoteSummary {
            input,
            quote,
            currency_symbol: self.settings.labels.currency_symbol.clone(),
        })
    }

    /// Renders the quote page for `input`.
    ///
    /// Client and advisor must be non-empty once trimmed. A missing or
    /// unreadable logo is skipped; any failure building the page is returned
    /// and no bytes are produced.
    pub fn generate(&self, input: &QuoteInput) -> Result<RenderedDocument, GenerationError> {
        let input = input.trimmed();
        if input.client.is_empty() || input.advisor.is_empty() {
            return Err(GenerationError::Validation(
                "client and advisor names are required".into(),
            ));
        }
        input.check_figures()?;

        let quote = input.quote();
        let logo = self.load_logo();
        let document = QuoteDocument {
            input: &input,
            quote: &quote,
            generated_at: self.clock.now(),
            labels: &self.settings.labels,
            page_size: self.settings.page_size,
        };

        let bytes = self
            .renderer
            .render(&document, logo.as_ref(), Cursor::new(Vec::new()))?
            .into_inner();
        let file_name =
            suggested_file_name(&self.settings.file_name_prefix, &input.lot, &input.client);
        log::info!("Generated '{}' ({} bytes)", file_name, bytes.len());

        Ok(RenderedDocument {
            bytes,
            file_name,
            content_type: DocumentRenderer::<Cursor<Vec<u8>>>::content_type(&self.renderer),
            quote,
        })
    }

    fn load_logo(&self) -> Option<LogoImage> {
        let path = self.settings.logo_path.as_str();
        if !self.resources.exists(path) {
            log::debug!("No logo at '{}' in {}", path, self.resources.name());
            return None;
        }
        match self.resources.load(path) {
            Ok(data) => Some(LogoImage::new(path, data)),
            Err(e) => {
                log::warn!("Could not read logo '{}': {}", path, e);
                None
            }
        }
    }
}

/// Builder for [`QuoteGenerator`].
#[derive(Default)]
pub struct QuoteGeneratorBuilder {
    settings: QuoteSettings,
    resources: Option<Arc<dyn ResourceProvider>>,
    clock: Option<Arc<dyn Clock>>,
}

impl QuoteGeneratorBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_settings(mut self, settings: QuoteSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Loads settings from a JSON file.
    pub fn with_settings_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, GenerationError> {
        self.settings = QuoteSettings::from_file(path)?;
        Ok(self)
    }

    /// Overrides where the logo is looked up. Takes precedence over the
    /// settings' `resourceDir`.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> Result<QuoteGenerator, GenerationError> {
        self.settings.validate()?;

        let resources = match self.resources {
            Some(provider) => provider,
            None => match &self.settings.resource_dir {
                Some(dir) => Arc::new(FilesystemResourceProvider::new(dir)) as Arc<dyn ResourceProvider>,
                None => Arc::new(FilesystemResourceProvider::beside_executable()) as Arc<dyn ResourceProvider>,
            },
        };
        log::debug!(
            "Quote generator using {} (base: {:?})",
            resources.name(),
            resources.base_path()
        );

        Ok(QuoteGenerator {
            settings: self.settings,
            resources,
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            renderer: LopdfQuoteRenderer::new(),
        })
    }
}
