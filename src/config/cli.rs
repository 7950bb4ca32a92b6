use clap::Parser;
use std::path::PathBuf;

/// metalens - extrae la metadata de imagenes, PDFs, audio y documentos Word
///
/// Imprime la metadata encontrada y la guarda como `<archivo>_metadata.html`
/// y, opcionalmente, `<archivo>_metadata.json`.
#[derive(Parser, Debug)]
#[command(name = "metalens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Archivo a analizar (si se omite, se solicita de forma interactiva)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Guarda tambien el reporte JSON sin preguntar
    #[arg(long, conflicts_with = "no_json")]
    pub json: bool,

    /// No guarda el reporte JSON ni pregunta por el
    #[arg(long)]
    pub no_json: bool,

    /// Directorio donde se escriben los reportes (por defecto, el directorio actual)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Salida detallada (se puede repetir: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Solo muestra errores en el registro
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Filtro de registro por defecto segun `-v`/`-q`.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
