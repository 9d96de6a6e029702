use crate::error::GenerationError;
use cotizador_render_core::DocumentLabels;
use cotizador_types::PageSize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME_PREFIX: &str = "cotizacion_lote";
pub const DEFAULT_LOGO_PATH: &str = "logo.png";

/// Generator settings, read from a JSON file.
///
/// Every field is optional in the file; missing ones take the defaults of the
/// stock quote page.
///
/// ```json
/// {
///   "currencySymbol": "Q",
///   "footerText": "Inmobiliaria Norte",
///   "resourceDir": "assets",
///   "pageSize": "A4"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteSettings {
    #[serde(flatten)]
    pub labels: DocumentLabels,
    pub file_name_prefix: String,
    /// Logo location, relative to `resource_dir`.
    pub logo_path: String,
    /// Directory holding the logo. `None` means the executable's directory.
    pub resource_dir: Option<PathBuf>,
    pub page_size: PageSize,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            labels: DocumentLabels::default(),
            file_name_prefix: DEFAULT_FILE_NAME_PREFIX.to_string(),
            logo_path: DEFAULT_LOGO_PATH.to_string(),
            resource_dir: None,
            page_size: PageSize::default(),
        }
    }
}

impl QuoteSettings {
    pub fn from_json(json: &str) -> Result<Self, GenerationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads settings from `path`. A relative `resourceDir` is resolved
    /// against the directory containing the file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GenerationError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            GenerationError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read settings from '{}': {}", path.display(), e),
            ))
        })?;
        let mut settings = Self::from_json(&source).map_err(|e| {
            GenerationError::Config(format!("'{}': {}", path.display(), e))
        })?;

        if let Some(dir) = settings.resource_dir.as_ref()
            && dir.is_relative()
            && let Some(parent) = path.parent()
        {
            settings.resource_dir = Some(parent.join(dir));
        }
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.logo_path.trim().is_empty() {
            return Err(GenerationError::Config("logoPath must not be empty".into()));
        }
        if self.file_name_prefix.trim().is_empty() {
            return Err(GenerationError::Config("fileNamePrefix must not be empty".into()));
        }
        Ok(())
    }
}
