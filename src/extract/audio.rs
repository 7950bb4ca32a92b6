//! Metadata de etiquetas de audio (ID3v2, Vorbis comments, RIFF INFO, MP4 ilst).
//!
//! Usa lofty para leer todas las etiquetas del archivo y conserva las claves
//! nativas de cada formato.

use crate::error::Result;
use crate::metadata::MetadataMap;
use lofty::{ItemValue, Probe, Tag, TagItem, TaggedFileExt};
use std::path::Path;
use tracing::{debug, error};

pub fn extract_audio_metadata(path: &Path) -> MetadataMap {
    match read_audio_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            error!(
                "Error al extraer metadata del archivo de audio {}: {err}",
                path.display()
            );
            MetadataMap::new()
        }
    }
}

fn read_audio_metadata(path: &Path) -> Result<MetadataMap> {
    let tagged_file = Probe::open(path)?.read()?;
    if tagged_file.tags().is_empty() {
        debug!("No se encontraron etiquetas en {}", path.display());
    }

    Ok(collect_tag_items(tagged_file.tags()))
}

/// Une los elementos de todas las etiquetas; los valores repetidos de una
/// misma clave (varios `ARTIST`, varios `COMM`) se conservan juntos.
fn collect_tag_items<'a>(tags: impl IntoIterator<Item = &'a Tag>) -> MetadataMap {
    let mut metadata = MetadataMap::new();
    for tag in tags {
        for item in tag.items() {
            metadata.append(item_key(tag, item), item_value(item.value()));
        }
    }
    metadata
}

/// Clave nativa del formato (p. ej. `TIT2`, `TITLE`, `INAM`).
fn item_key(tag: &Tag, item: &TagItem) -> String {
    item.key()
        .map_key(tag.tag_type(), true)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{:?}", item.key()))
}

fn item_value(value: &ItemValue) -> String {
    match value {
        ItemValue::Text(text) | ItemValue::Locator(text) => {
            text.trim_end_matches('\0').to_string()
        }
        ItemValue::Binary(bytes) => format!("<{} bytes>", bytes.len()),
    }
}
