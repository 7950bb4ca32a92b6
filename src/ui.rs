//! Presentacion del modo interactivo: cabecera y guia de formatos.

use crate::dispatch::FileKind;
use console::style;
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 16;

pub fn render_header<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "═".repeat(RULE_WIDTH);
    writeln!(out, "\n{}", style(&rule).cyan())?;
    writeln!(
        out,
        "  {}  {}",
        style("metalens").cyan().bold(),
        style("metadata de un archivo → reporte HTML + JSON").dim()
    )?;
    writeln!(out, "{}\n", style(&rule).cyan())
}

/// Una linea por tipo de archivo con sus extensiones, y el destino de los reportes.
pub fn render_file_input_hint<W: Write>(out: &mut W, output_dir: &Path) -> io::Result<()> {
    writeln!(out, "{}", style("Formatos reconocidos:").cyan())?;
    for kind in FileKind::ALL {
        let extensions = kind
            .extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            out,
            "  {:<width$} {}",
            style(kind.label()).bold(),
            style(extensions).dim(),
            width = LABEL_WIDTH
        )?;
    }

    writeln!(
        out,
        "{} {}",
        style("Reportes en:").cyan(),
        style(output_dir.display()).dim()
    )?;
    writeln!(
        out,
        "{}\n",
        style("La ruta puede ir entre comillas (util al arrastrar el archivo a la terminal).").dim()
    )
}
