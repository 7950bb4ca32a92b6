use super::cli::Cli;
use std::path::PathBuf;

/// Que hacer con el reporte JSON una vez escrito el HTML.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum JsonPolicy {
    /// Preguntar al usuario; una respuesta vacia equivale a "si".
    #[default]
    Ask,
    Always,
    Never,
}

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub path: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub json: JsonPolicy,
}

impl Settings {
    /// `output_dir` vacio equivale al directorio de trabajo actual.
    pub fn from_cli(cli: &Cli) -> Self {
        let json = if cli.json {
            JsonPolicy::Always
        } else if cli.no_json {
            JsonPolicy::Never
        } else {
            JsonPolicy::Ask
        };

        Self {
            path: cli.path.clone(),
            output_dir: cli.output_dir.clone().unwrap_or_default(),
            json,
        }
    }
}
