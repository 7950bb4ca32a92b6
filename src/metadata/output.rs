//! Impresion del mapa de metadata en consola.

use crate::metadata::map::MetadataMap;
use console::style;
use std::io::{self, Write};

/// Escribe el encabezado y una linea `clave: valor` por cada entrada.
pub fn print_metadata<W: Write>(out: &mut W, metadata: &MetadataMap) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", style("Metadata extraída:").cyan().bold())?;
    for (key, value) in metadata.iter() {
        print_property(out, key, value)?;
    }
    Ok(())
}

/// Imprime una propiedad con el estilo consistente de la herramienta.
pub fn print_property<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{}: {}", style(label).cyan(), value)
}
