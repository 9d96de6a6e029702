//! Asset providers for the quote pipeline.
//!
//! - [`FilesystemResourceProvider`]: reads assets from a resource directory on disk
//! - [`InMemoryResourceProvider`]: re-exported from `cotizador-traits`

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

pub use cotizador_traits::InMemoryResourceProvider;
