//! Lectura de propiedades principales en documentos Word empaquetados en ZIP.

use crate::error::{MetalensError, Result};
use crate::formatting::format_w3c_datetime;
use crate::metadata::MetadataMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, error};
use xmltree::{Element, XMLNode};
use zip::ZipArchive;
use zip::result::ZipError;

pub const DC_NS: &str = "http://purl.org/dc/elements/1.1/";
pub const CP_NS: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
pub const DCTERMS_NS: &str = "http://purl.org/dc/terms/";

const MAIN_DOCUMENT_PART: &str = "word/document.xml";
const CORE_PROPERTIES_PART: &str = "docProps/core.xml";
const MISSING_DATE: &str = "None";

#[derive(Clone, Copy)]
enum PropertyKind {
    Text,
    Date,
    Integer,
}

struct CoreProperty {
    name: &'static str,
    local_name: &'static str,
    namespace: &'static str,
    kind: PropertyKind,
}

/// Propiedades de `core.xml` en orden alfabetico de su nombre publico.
const CORE_PROPERTIES: [CoreProperty; 15] = [
    CoreProperty {
        name: "author",
        local_name: "creator",
        namespace: DC_NS,
        kind: PropertyKind::Text,
    },
    CoreProperty {
        name: "category",
        local_name: "category",
        namespace: CP_NS,
        kind: PropertyKind::Text,
    },
    CoreProperty {
        name: "comments",
        local_name: "description",
        namespace: DC_NS,
        kind: PropertyKind::Text,
    },
    CoreProperty {
        name: "content_status",
        local_name: "contentStatus",
        namespace: CP_NS,
        kind: PropertyKind::Text,
    },
    CoreProperty {
        name: "created",
        local_name: "created",
        namespace: DCTERMS_NS,
        kind: PropertyKind::Date,
    },
    CoreProperty {
        name: "identifier",
        local_name: "identifier",
        namespace: DC_NS,
        kind: PropertyKind::Text,
    },
    CoreProperty {
        name: "keywords",
        local_name: "keywords",
        namespace: CP_NS,
        kind: PropertyKind::Text,
    },
    CoreProperty {
        name: "language",
        local_name: "language",
        namespace: DC_NS,
        kind: PropertyKind::Text,
    },
    CoreProperty {
        name: "last_modified_by",
        local_name: "lastModifiedBy",
        namespace: CP_NS,
        kind: PropertyKind::Text,
    },
    CoreProperty {
        name: "last_printed",
        local_name: "lastPrinted",
        namespace: CP_NS,
        kind: PropertyKind::Date,
    },
    CoreProperty {
        name: "modified",
        local_name: "modified",
        namespace: DCTERMS_NS,
        kind: PropertyKind::Date,
    },
    CoreProperty {
        name: "revision",
        local_name: "revision",
        namespace: CP_NS,
        kind: PropertyKind::Integer,
    },
    CoreProperty {
        name: "subject",
        local_name: "subject",
        namespace: DC_NS,
        kind: PropertyKind::Text,
    },
    CoreProperty {
        name: "title",
        local_name: "title",
        namespace: DC_NS,
        kind: PropertyKind::Text,
    },
    CoreProperty {
        name: "version",
        local_name: "version",
        namespace: CP_NS,
        kind: PropertyKind::Text,
    },
];

pub fn extract_doc_metadata(path: &Path) -> MetadataMap {
    match read_doc_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => {
            error!(
                "Error al extraer metadata del documento Word {}: {err}",
                path.display()
            );
            MetadataMap::new()
        }
    }
}

fn read_doc_metadata(path: &Path) -> Result<MetadataMap> {
    let file = File::open(path).map_err(|err| MetalensError::read(path, err))?;
    let mut archive = ZipArchive::new(file)?;

    if archive.index_for_name(MAIN_DOCUMENT_PART).is_none() {
        return Err(MetalensError::NotAWordDocument);
    }

    let root = match archive.by_name(CORE_PROPERTIES_PART) {
        Ok(mut core_file) => {
            let mut contents = String::new();
            core_file
                .read_to_string(&mut contents)
                .map_err(|err| MetalensError::read(path, err))?;
            Some(Element::parse(contents.as_bytes())?)
        }
        Err(ZipError::FileNotFound) => {
            debug!(path = %path.display(), "documento sin docProps/core.xml");
            None
        }
        Err(err) => return Err(err.into()),
    };

    Ok(core_properties(root.as_ref()))
}

fn core_properties(root: Option<&Element>) -> MetadataMap {
    CORE_PROPERTIES
        .iter()
        .map(|property| {
            let raw = root.and_then(|root| {
                find_child_text(root, property.local_name, Some(property.namespace))
            });
            (property.name, render_property(property.kind, raw.as_deref()))
        })
        .collect()
}

fn render_property(kind: PropertyKind, raw: Option<&str>) -> String {
    match kind {
        PropertyKind::Text => raw.unwrap_or_default().to_string(),
        PropertyKind::Date => raw
            .and_then(format_w3c_datetime)
            .unwrap_or_else(|| MISSING_DATE.to_string()),
        PropertyKind::Integer => raw
            .and_then(|value| value.trim().parse::<i64>().ok())
            .unwrap_or(0)
            .to_string(),
    }
}

fn find_child_text(root: &Element, local_name: &str, namespace: Option<&str>) -> Option<String> {
    for node in &root.children {
        if let XMLNode::Element(child) = node
            && child.name == local_name
            && namespace_matches(child, namespace)
        {
            return Some(element_text_content(child));
        }
    }
    None
}

fn namespace_matches(element: &Element, namespace: Option<&str>) -> bool {
    match (namespace, element.namespace.as_deref()) {
        (Some(expected), Some(actual)) => expected == actual,
        (Some(_), None) => false,
        (None, _) => true,
    }
}

fn element_text_content(element: &Element) -> String {
    let mut content = String::new();
    for node in &element.children {
        if let XMLNode::Text(text) = node {
            content.push_str(text);
        }
    }
    content.trim().to_string()
}
