//! Mapa de metadata normalizado, su impresion y sus reportes.

pub mod export;
pub mod map;
pub mod output;

pub use export::{ExportFormat, export_metadata, report_path};
pub use map::MetadataMap;
pub use output::print_metadata;
