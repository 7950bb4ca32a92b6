//! Extracción de metadata en PDFs mediante lectura del diccionario Info.

use crate::error::Result;
use crate::metadata::MetadataMap;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, error};

const UTF16_BOM: [u8; 2] = [0xFE, 0xFF];

pub fn extract_pdf_metadata(path: &Path) -> MetadataMap {
    match read_pdf_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            error!("Error al extraer metadata del PDF {}: {err}", path.display());
            MetadataMap::new()
        }
    }
}

fn read_pdf_metadata(path: &Path) -> Result<MetadataMap> {
    let doc = Document::load(path)?;

    let info = match doc.trailer.get(b"Info") {
        Ok(info) => info,
        Err(_) => {
            debug!(path = %path.display(), "el trailer no tiene diccionario Info");
            return Ok(MetadataMap::new());
        }
    };

    let Some(info_dict) = deref_dictionary(&doc, info) else {
        debug!(path = %path.display(), "Info no apunta a un diccionario");
        return Ok(MetadataMap::new());
    };

    let metadata = info_dict
        .iter()
        .filter_map(|(key, value)| {
            object_to_string(&doc, value, &mut HashSet::new())
                .map(|text| (String::from_utf8_lossy(key).into_owned(), text))
        })
        .collect();
    Ok(metadata)
}

fn deref_dictionary<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Reference(reference) => doc.get_dictionary(*reference).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// `visiting` guarda las referencias en curso; una referencia que vuelve a
/// aparecer dentro de si misma se descarta.
fn object_to_string(
    doc: &Document,
    obj: &Object,
    visiting: &mut HashSet<ObjectId>,
) -> Option<String> {
    match obj {
        Object::String(bytes, _) => Some(decode_text_string(bytes)),
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        Object::Integer(value) => Some(value.to_string()),
        Object::Real(value) => Some(value.to_string()),
        Object::Boolean(value) => Some(value.to_string()),
        Object::Null => Some("null".to_string()),
        Object::Reference(reference) => {
            if !visiting.insert(*reference) {
                debug!(?reference, "referencia ciclica en el diccionario Info");
                return None;
            }
            let text = doc
                .get_object(*reference)
                .ok()
                .and_then(|inner| object_to_string(doc, inner, visiting));
            visiting.remove(reference);
            text
        }
        Object::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .filter_map(|item| object_to_string(doc, item, visiting))
                .collect();
            Some(format!("[{}]", parts.join(", ")))
        }
        _ => None,
    }
}

/// Decodifica una cadena de texto PDF: UTF-16BE con BOM o bytes tratados como UTF-8.
fn decode_text_string(bytes: &[u8]) -> String {
    if let Some(body) = bytes.strip_prefix(&UTF16_BOM) {
        let units: Vec<u16> = body
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    String::from_utf8_lossy(bytes).into_owned()
}
