//! Seleccion del extractor segun la extension del archivo.

use crate::extract::{
    extract_audio_metadata, extract_doc_metadata, extract_image_metadata, extract_pdf_metadata,
};
use crate::metadata::MetadataMap;
use std::path::Path;
use tracing::{debug, info};

pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "tiff"];
pub const PDF_EXTENSIONS: [&str; 1] = ["pdf"];
pub const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "flac", "wav", "m4a"];
pub const WORD_EXTENSIONS: [&str; 1] = ["docx"];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileKind {
    Image,
    Pdf,
    Audio,
    Word,
}

impl FileKind {
    pub const ALL: [FileKind; 4] = [
        FileKind::Image,
        FileKind::Pdf,
        FileKind::Audio,
        FileKind::Word,
    ];

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FileKind::Image => &IMAGE_EXTENSIONS,
            FileKind::Pdf => &PDF_EXTENSIONS,
            FileKind::Audio => &AUDIO_EXTENSIONS,
            FileKind::Word => &WORD_EXTENSIONS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileKind::Image => "imagen",
            FileKind::Pdf => "PDF",
            FileKind::Audio => "audio",
            FileKind::Word => "documento Word",
        }
    }

    /// Tipo correspondiente a la extension (sin distinguir mayusculas).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.extensions().contains(&extension.as_str()))
    }

    pub fn extract(self, path: &Path) -> MetadataMap {
        match self {
            FileKind::Image => extract_image_metadata(path),
            FileKind::Pdf => extract_pdf_metadata(path),
            FileKind::Audio => extract_audio_metadata(path),
            FileKind::Word => extract_doc_metadata(path),
        }
    }
}

#[derive(Debug)]
pub enum Analysis {
    InvalidPath,
    Unsupported { extension: Option<String> },
    Extracted { kind: FileKind, metadata: MetadataMap },
}

/// Verifica la ruta, elige el extractor y devuelve la metadata obtenida.
pub fn analyze_file(path: &Path) -> Analysis {
    if !path.is_file() {
        debug!(path = %path.display(), "la ruta no es un archivo existente");
        return Analysis::InvalidPath;
    }

    let Some(kind) = FileKind::from_path(path) else {
        let extension = path
            .extension()
            .map(|value| value.to_string_lossy().into_owned());
        return Analysis::Unsupported { extension };
    };

    info!(path = %path.display(), "analizando {}", kind.label());
    let metadata = kind.extract(path);
    Analysis::Extracted { kind, metadata }
}

/// Lista legible de extensiones soportadas, p. ej. `.jpg, .jpeg, ...`.
pub fn supported_extensions() -> String {
    FileKind::ALL
        .iter()
        .flat_map(|kind| kind.extensions().iter())
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}
