//! Reading and writing OEIS-style b-files.
//!
//! The on-disk format is one term per line, `<index> <value>`, both
//! decimal, with `#` comment lines allowed. Reading skips any other
//! malformed line with a rendered warning; a bad line in a term list
//! never becomes a caller error, only failing to read the file at all
//! does.

use std::path::Path;

use num_bigint::BigUint;

use crate::diagnostic::Diagnostic;
use crate::span::Span;

/// Parse one line of a b-file into its value.
fn parse_line(line: &str) -> Option<BigUint> {
    let mut parts = line.split_whitespace();
    parts.next()?.parse::<u64>().ok()?;
    let value = parts.next()?.parse::<BigUint>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(value)
}

/// Read every term of a b-file, in file order.
///
/// Comment lines and blank lines are ignored; any other line that does
/// not parse as `<index> <value>` is skipped with a warning on stderr.
pub fn read_terms(path: &Path) -> Result<Vec<BigUint>, Diagnostic> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Diagnostic::error(
            format!("cannot read '{}': {}", path.display(), e),
            Span::dummy(),
        )
    })?;
    let filename = path.to_string_lossy();

    let mut terms = Vec::new();
    let mut offset = 0usize;
    for line in content.lines() {
        let span = Span::new(offset as u32, (offset + line.len()) as u32);
        offset += line.len() + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_line(trimmed) {
            Some(value) => terms.push(value),
            None => {
                Diagnostic::warning("skipping malformed line".to_string(), span)
                    .with_note("expected '<index> <value>'".to_string())
                    .render(&filename, &content);
            }
        }
    }

    Ok(terms)
}

/// Write `count` terms of a stream as a b-file, indices starting at 1.
pub fn write_terms(
    path: &Path,
    terms: impl Iterator<Item = BigUint>,
    count: usize,
) -> Result<(), Diagnostic> {
    use std::io::Write;

    let file = std::fs::File::create(path).map_err(|e| {
        Diagnostic::error(
            format!("cannot create '{}': {}", path.display(), e),
            Span::dummy(),
        )
    })?;
    let mut out = std::io::BufWriter::new(file);

    for (index, term) in terms.take(count).enumerate() {
        writeln!(out, "{} {}", index + 1, term).map_err(|e| {
            Diagnostic::error(
                format!("cannot write '{}': {}", path.display(), e),
                Span::dummy(),
            )
        })?;
    }
    Ok(())
}
