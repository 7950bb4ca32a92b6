//! Tipos de error compartidos por extractores y reportes.
//!
//! Los errores de extraccion nunca llegan al usuario como fallo: cada
//! extractor los registra y devuelve un mapa vacio. Solo los errores al
//! escribir reportes o al leer la consola detienen el proceso.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetalensError {
    #[error("No se pudo leer `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No se pudo escribir el reporte `{path}`: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Metadata EXIF invalida: {0}")]
    Exif(#[from] exif::Error),

    #[error("PDF invalido: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("Audio invalido: {0}")]
    Audio(#[from] lofty::error::LoftyError),

    #[error("Contenedor ZIP invalido: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML invalido: {0}")]
    Xml(#[from] xmltree::ParseError),

    #[error("No se pudo serializar JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No se pudo determinar el directorio de trabajo para los reportes: {0}")]
    WorkingDir(#[source] std::io::Error),

    #[error("El archivo no es un documento Word (falta word/document.xml)")]
    NotAWordDocument,

    #[error("Error de consola: {0}")]
    Console(#[from] std::io::Error),
}

impl MetalensError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MetalensError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn report(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MetalensError::Report {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MetalensError>;
