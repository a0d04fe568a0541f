//! Output formats for the `tokenize` command
//!
//! `lines` prints as it goes, one token per line (a line group prints its tokens
//! tab separated on one line). `json` and `yaml` need the whole result first.

use std::io::{self, Write};
use textmorse::Tokenized;

/// All formats accepted by `tokenize --format`
pub const AVAILABLE_FORMATS: &[&str] = &["lines", "json", "yaml"];

/// Write `items` to `out` in the named format
pub fn write_tokens<W, I>(out: &mut W, items: I, format: &str) -> Result<(), String>
where
    W: Write,
    I: Iterator<Item = Tokenized>,
{
    match format {
        "lines" => {
            for item in items {
                write_line(out, &item).map_err(|e| format!("Write failed: {}", e))?;
            }
            Ok(())
        }
        "json" => {
            let items: Vec<_> = items.collect();
            let json = serde_json::to_string_pretty(&items)
                .map_err(|e| format!("JSON serialization failed: {}", e))?;
            writeln!(out, "{}", json).map_err(|e| format!("Write failed: {}", e))
        }
        "yaml" => {
            let items: Vec<_> = items.collect();
            let yaml = serde_yaml::to_string(&items)
                .map_err(|e| format!("YAML serialization failed: {}", e))?;
            write!(out, "{}", yaml).map_err(|e| format!("Write failed: {}", e))
        }
        _ => Err(format!(
            "Unknown format: {} (available: {})",
            format,
            AVAILABLE_FORMATS.join(", ")
        )),
    }
}

fn write_line<W: Write>(out: &mut W, item: &Tokenized) -> io::Result<()> {
    match item {
        Tokenized::Token(token) => writeln!(out, "{}", token),
        Tokenized::Line(group) => writeln!(out, "{}", group.tokens.join("\t")),
    }
}
