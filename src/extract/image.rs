//! Extracción de metadata EXIF para imágenes.

use crate::error::{MetalensError, Result};
use crate::metadata::MetadataMap;
use exif::{Context, Exif, Field, In, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, error};

/// Devuelve todos los campos EXIF de la imagen, o un mapa vacío si no se pudo leer.
pub fn extract_image_metadata(path: &Path) -> MetadataMap {
    match read_image_metadata(path) {
        Ok(metadata) => metadata,
        Err(MetalensError::Exif(exif::Error::NotFound(container))) => {
            debug!(path = %path.display(), "sin bloque EXIF en contenedor {container}");
            MetadataMap::new()
        }
        Err(err) => {
            error!(
                "Error al extraer metadata de la imagen {}: {err}",
                path.display()
            );
            MetadataMap::new()
        }
    }
}

fn read_image_metadata(path: &Path) -> Result<MetadataMap> {
    let file = File::open(path).map_err(|err| MetalensError::read(path, err))?;
    let mut bufreader = BufReader::new(&file);
    let exif = exif::Reader::new().read_from_container(&mut bufreader)?;

    let metadata = exif
        .fields()
        .map(|field| (field_key(field), field_value(field, &exif)))
        .collect();
    Ok(metadata)
}

/// Clave `"<grupo> <etiqueta>"`, p. ej. `Image Make` o `GPS GPSLatitude`.
fn field_key(field: &Field) -> String {
    let group = match (field.tag.context(), field.ifd_num) {
        (Context::Exif, _) => "EXIF",
        (Context::Gps, _) => "GPS",
        (Context::Interop, _) => "Interoperability",
        (_, ifd) if ifd == In::THUMBNAIL => "Thumbnail",
        _ => "Image",
    };
    format!("{group} {}", field.tag)
}

fn field_value(field: &Field, exif: &Exif) -> String {
    match &field.value {
        Value::Ascii(strings) => strings
            .iter()
            .map(|bytes| {
                String::from_utf8_lossy(bytes)
                    .trim_end_matches('\0')
                    .trim()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => field.display_value().with_unit(exif).to_string(),
    }
}
