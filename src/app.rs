//! Flujo principal: ruta → extraccion → impresion → reportes.

use crate::config::{JsonPolicy, Settings};
use crate::dispatch::{Analysis, analyze_file, supported_extensions};
use crate::error::{MetalensError, Result};
use crate::metadata::{ExportFormat, MetadataMap, export_metadata, print_metadata};
use crate::ui;
use console::style;
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const YES_ANSWERS: [&str; 6] = ["", "yes", "y", "si", "sí", "s"];

/// Resultado de una ejecucion, util para pruebas y para el codigo de salida.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    InvalidPath,
    Unsupported,
    NoMetadata,
    Reported {
        html: PathBuf,
        json: Option<PathBuf>,
    },
}

/// Ejecuta la herramienta sobre la consola real.
pub fn run(settings: &Settings) -> Result<Outcome> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut settings = settings.clone();
    settings.output_dir = resolve_output_dir(&settings.output_dir, env::current_dir)?;

    let path = match &settings.path {
        Some(path) => path.clone(),
        None => {
            ui::render_header(&mut out)?;
            ui::render_file_input_hint(&mut out, &settings.output_dir)?;
            match prompt_for_path(&mut input, &mut out)? {
                Some(path) => path,
                None => {
                    writeln!(out, "\n{}", style("Fin de la entrada.").dim())?;
                    return Ok(Outcome::InvalidPath);
                }
            }
        }
    };

    run_with(&path, &settings, &mut input, &mut out)
}

/// Un directorio vacio se sustituye por el directorio de trabajo.
fn resolve_output_dir(
    configured: &Path,
    current_dir: impl FnOnce() -> io::Result<PathBuf>,
) -> Result<PathBuf> {
    if !configured.as_os_str().is_empty() {
        return Ok(configured.to_path_buf());
    }
    current_dir().map_err(MetalensError::WorkingDir)
}

/// Analiza `path` y escribe los reportes; la consola se recibe por parametro.
pub fn run_with<R: BufRead, W: Write>(
    path: &Path,
    settings: &Settings,
    input: &mut R,
    out: &mut W,
) -> Result<Outcome> {
    let metadata = match analyze_file(path) {
        Analysis::InvalidPath => {
            writeln!(
                out,
                "{}",
                style("Ruta inválida. Proporciona un archivo existente.").red()
            )?;
            return Ok(Outcome::InvalidPath);
        }
        Analysis::Unsupported { extension } => {
            warn!(
                path = %path.display(),
                extension = extension.as_deref().unwrap_or(""),
                "formato no soportado"
            );
            writeln!(
                out,
                "{}",
                style(format!(
                    "Formato no soportado. Extensiones admitidas: {}",
                    supported_extensions()
                ))
                .yellow()
            )?;
            return Ok(Outcome::Unsupported);
        }
        Analysis::Extracted { metadata, .. } => metadata,
    };

    if metadata.is_empty() {
        writeln!(out, "{}", style("No se encontró metadata en el archivo.").dim())?;
        return Ok(Outcome::NoMetadata);
    }

    print_metadata(out, &metadata)?;

    let html = save_report(&metadata, path, ExportFormat::Html, settings, out)?;

    let wants_json = match settings.json {
        JsonPolicy::Always => true,
        JsonPolicy::Never => false,
        JsonPolicy::Ask => ask_save_json(input, out)?,
    };
    let json = if wants_json {
        Some(save_report(&metadata, path, ExportFormat::Json, settings, out)?)
    } else {
        info!("reporte JSON omitido");
        None
    };

    Ok(Outcome::Reported { html, json })
}

fn save_report<W: Write>(
    metadata: &MetadataMap,
    source: &Path,
    format: ExportFormat,
    settings: &Settings,
    out: &mut W,
) -> Result<PathBuf> {
    let path = export_metadata(metadata, source, format, &settings.output_dir)?;
    writeln!(
        out,
        "{} {}",
        style(format!("Metadata guardada ({}) en", format.label())).green(),
        path.display()
    )?;
    Ok(path)
}

/// Pide la ruta al usuario. `None` si la entrada termino.
pub fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<PathBuf>> {
    write!(
        out,
        "{} {} ",
        style("Ruta del archivo a analizar").bold().cyan(),
        style("›").cyan()
    )?;
    out.flush()?;

    let mut buffer = String::new();
    if input.read_line(&mut buffer)? == 0 {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(clean_path_input(&buffer))))
}

/// Quita espacios y comillas que rodean una ruta pegada o arrastrada a la terminal.
pub fn clean_path_input(raw: &str) -> &str {
    raw.trim().trim_matches(|c: char| c == '"' || c == '\'')
}

/// Pregunta si se guarda el JSON. Enter (o fin de entrada) equivale a "si".
pub fn ask_save_json<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(
        out,
        "{} ",
        style("¿Deseas guardar la metadata como JSON? (si/no, Enter para si):").cyan()
    )?;
    out.flush()?;

    let mut buffer = String::new();
    input.read_line(&mut buffer)?;
    Ok(is_yes(&buffer))
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    YES_ANSWERS.contains(&answer.as_str())
}
