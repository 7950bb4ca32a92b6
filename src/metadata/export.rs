//! Exportacion del mapa de metadata a reportes HTML y JSON.

use crate::error::{MetalensError, Result};
use crate::metadata::map::MetadataMap;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const REPORT_SUFFIX: &str = "_metadata";
const JSON_INDENT: &[u8] = b"    ";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Html,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Html => "HTML",
            ExportFormat::Json => "JSON",
        }
    }
}

/// Ruta del reporte: `<nombre del archivo>_metadata.<ext>` dentro de `output_dir`.
pub fn report_path(source: &Path, format: ExportFormat, output_dir: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{name}{REPORT_SUFFIX}.{}", format.extension()))
}

/// Escribe el reporte, sobrescribiendo cualquier archivo previo con el mismo nombre.
pub fn export_metadata(
    metadata: &MetadataMap,
    source: &Path,
    format: ExportFormat,
    output_dir: &Path,
) -> Result<PathBuf> {
    let path = report_path(source, format, output_dir);
    let contents = match format {
        ExportFormat::Html => render_html(metadata),
        ExportFormat::Json => render_json(metadata)?,
    };

    fs::write(&path, contents).map_err(|err| MetalensError::report(&path, err))?;
    debug!(
        path = %path.display(),
        entries = metadata.len(),
        "reporte {} escrito",
        format.label()
    );
    Ok(path)
}

pub(crate) fn render_html(metadata: &MetadataMap) -> String {
    let mut output = String::new();
    output.push_str("<html><head><meta charset=\"utf-8\"><title>Metadata</title></head><body>");
    output.push_str("<h2>Extracted Metadata</h2>");
    output.push_str("<table border='1' style='border-collapse: collapse; width: 100%;'>");
    output.push_str("<tr><th>Key</th><th>Value</th></tr>");
    for (key, value) in metadata.iter() {
        output.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(key),
            escape_html(value)
        ));
    }
    output.push_str("</table></body></html>");
    output
}

pub(crate) fn render_json(metadata: &MetadataMap) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    metadata.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
