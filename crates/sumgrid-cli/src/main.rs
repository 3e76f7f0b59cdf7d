//! sumgrid CLI - drive the spreadsheet widget from a script of interactions

mod script;
mod text;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use sumgrid_core::{GridSettings, SheetWidget};
use tracing_subscriber::EnvFilter;

use crate::script::{parse_script, Command};
use crate::text::TextRenderer;

#[derive(Parser)]
#[command(name = "sumgrid")]
#[command(
    author,
    version,
    about = "Replay spreadsheet grid interactions and print the rendered grid"
)]
struct Cli {
    /// Number of columns, row-label gutter included
    #[arg(long)]
    cols: Option<u16>,

    /// Number of rows
    #[arg(long)]
    rows: Option<u32>,

    /// JSON settings file (`{"num_cols": 6, "num_rows": 10}`)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Script of interactions (default: stdin)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Only print the grid for `show` commands and at the end
    #[arg(short, long)]
    quiet: bool,

    /// Log widget events to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = load_settings(cli.config.as_deref(), cli.cols, cli.rows)?;
    let source = read_script(cli.script.as_deref())?;
    let commands = parse_script(&source)?;

    let mut stdout = io::stdout().lock();
    run(settings, &commands, cli.quiet, &mut stdout)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Settings from the optional config file, with flags taking precedence
fn load_settings(config: Option<&Path>, cols: Option<u16>, rows: Option<u32>) -> Result<GridSettings> {
    let mut settings = match config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse settings in '{}'", path.display()))?
        }
        None => GridSettings::default(),
    };

    if let Some(cols) = cols {
        settings.num_cols = cols;
    }
    if let Some(rows) = rows {
        settings.num_rows = rows;
    }
    Ok(settings)
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script '{}'", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read script from stdin")?;
            Ok(source)
        }
    }
}

/// Replay commands against a fresh widget, writing frames to `out`
fn run(
    settings: GridSettings,
    commands: &[(usize, Command)],
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut widget =
        SheetWidget::new(settings, TextRenderer::new()).context("Failed to create grid")?;

    for (line_no, command) in commands {
        let result = match command {
            Command::Cell { col, row } => widget.click_cell(*col, *row),
            Command::Row(row) => widget.click_row_label(*row),
            Command::Col(col) => widget.click_column_header(*col),
            Command::Edit(text) => widget.commit_editor(text),
            Command::AddRow => widget.add_row(),
            Command::AddCol => widget.add_column(),
            Command::Show => {
                out.write_all(widget.renderer().frame().as_bytes())?;
                continue;
            }
        };
        result.with_context(|| format!("line {}: {:?} failed", line_no, command))?;

        if !quiet {
            writeln!(out, "> {:?}", command)?;
            out.write_all(widget.renderer().frame().as_bytes())?;
        }
    }

    if quiet {
        out.write_all(widget.renderer().frame().as_bytes())?;
    }
    out.flush().context("Failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run_to_string(settings: GridSettings, script: &str, quiet: bool) -> Result<String> {
        let commands = parse_script(script)?;
        let mut out = Vec::new();
        run(settings, &commands, quiet, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_settings_from_file_and_flags() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"num_cols": 4, "num_rows": 7}}"#).unwrap();

        let settings = load_settings(Some(file.path()), None, None).unwrap();
        assert_eq!(settings, GridSettings::new(4, 7));

        let settings = load_settings(Some(file.path()), Some(3), None).unwrap();
        assert_eq!(settings, GridSettings::new(3, 7));

        let settings = load_settings(None, None, Some(2)).unwrap();
        assert_eq!(settings, GridSettings::new(6, 2));
    }

    #[test]
    fn test_partial_settings_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"num_rows": 3}}"#).unwrap();

        let settings = load_settings(Some(file.path()), None, None).unwrap();
        assert_eq!(settings, GridSettings::new(6, 3));
    }

    #[test]
    fn test_bad_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_settings(Some(file.path()), None, None).is_err());
    }

    #[test]
    fn test_run_quiet_prints_final_frame() {
        let out = run_to_string(
            GridSettings::new(3, 2),
            "cell 2 0\nedit 5\ncell 2 1\nedit 3\n",
            true,
        )
        .unwrap();

        assert!(out.contains("Sum | 0 | 8"));
        assert_eq!(out.matches("editor:").count(), 1);
    }

    #[test]
    fn test_run_echoes_each_command() {
        let out = run_to_string(GridSettings::new(3, 2), "col 1\nadd-col\n", false).unwrap();

        assert_eq!(out.matches("editor:").count(), 2);
        assert!(out.contains("> Col(1)"));
        assert!(out.contains("> AddCol"));
    }

    #[test]
    fn test_run_reports_failing_line() {
        let err = run_to_string(GridSettings::new(3, 2), "col 1\nedit nope\n", true).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }
}
