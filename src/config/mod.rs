//! Configuracion de la ejecucion a partir de la linea de comandos.

mod cli;
mod settings;

pub use cli::Cli;
pub use settings::{JsonPolicy, Settings};
