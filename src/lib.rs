//! Extraccion de metadata de imagenes, PDFs, audio y documentos Word.
//!
//! Cada formato delega en una libreria especializada; el resultado se
//! normaliza en un [`MetadataMap`] plano que se imprime y se guarda como
//! reporte HTML y JSON.

pub mod app;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod formatting;
pub mod metadata;
pub mod ui;

#[cfg(test)]
mod fixtures;

pub use dispatch::{Analysis, FileKind, analyze_file};
pub use error::{MetalensError, Result};
pub use metadata::MetadataMap;
