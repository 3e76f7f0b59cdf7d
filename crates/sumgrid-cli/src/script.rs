//! Interaction scripts
//!
//! One command per line. Blank lines and lines starting with `#` are skipped.

use anyhow::{bail, Context, Result};

/// A single interaction event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `cell <col> <row>`
    Cell { col: u16, row: u32 },
    /// `row <row>`
    Row(u32),
    /// `col <col>`
    Col(u16),
    /// `edit <text...>`; everything after the keyword and one space
    Edit(String),
    /// `add-row`
    AddRow,
    /// `add-col`
    AddCol,
    /// `show`
    Show,
}

/// Parse one script line; `Ok(None)` for blanks and comments
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let line = line.trim_start();
    let (keyword, rest) = match line.split_once(' ') {
        Some((k, r)) => (k, r),
        None => (line.trim_end(), ""),
    };

    let command = match keyword {
        "cell" => {
            let mut args = rest.split_whitespace();
            let col = next_arg(&mut args, "column")?;
            let row = next_arg(&mut args, "row")?;
            no_more(args)?;
            Command::Cell { col, row }
        }
        "row" => {
            let mut args = rest.split_whitespace();
            let row = next_arg(&mut args, "row")?;
            no_more(args)?;
            Command::Row(row)
        }
        "col" => {
            let mut args = rest.split_whitespace();
            let col = next_arg(&mut args, "column")?;
            no_more(args)?;
            Command::Col(col)
        }
        "edit" => Command::Edit(rest.to_string()),
        "add-row" => Command::AddRow,
        "add-col" => Command::AddCol,
        "show" => Command::Show,
        other => bail!("unknown command '{}'", other),
    };
    Ok(Some(command))
}

/// Parse a whole script, tagging errors with their 1-based line number
pub fn parse_script(source: &str) -> Result<Vec<(usize, Command)>> {
    let mut commands = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        if let Some(command) =
            parse_line(line).with_context(|| format!("line {}: '{}'", line_no, line.trim()))?
        {
            commands.push((line_no, command));
        }
    }
    Ok(commands)
}

fn next_arg<'a, T>(args: &mut impl Iterator<Item = &'a str>, name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .next()
        .with_context(|| format!("missing {} index", name))?;
    raw.parse()
        .with_context(|| format!("invalid {} index '{}'", name, raw))
}

fn no_more<'a>(mut args: impl Iterator<Item = &'a str>) -> Result<()> {
    if let Some(extra) = args.next() {
        bail!("unexpected argument '{}'", extra);
    }
    Ok(())
}
