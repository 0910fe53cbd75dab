use std::path::Path;

use tracing::debug;

use super::model::{ListingRow, ListingTable};

/// Parse a listings CSV into headers and rows.
///
/// Blank lines are dropped before anything else, so quoted fields cannot span
/// lines. A file with fewer than two non-blank lines yields an empty table.
pub fn parse(text: &str) -> ListingTable {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.len() < 2 {
        return ListingTable::default();
    }

    let headers: Vec<String> = split_fields(lines[0], Quotes::Keep)
        .into_iter()
        .map(|h| strip_outer_quotes(&h).to_string())
        .collect();

    let rows = lines[1..]
        .iter()
        .map(|line| ListingRow::from_values(&headers, split_fields(line, Quotes::Unescape)))
        .collect::<Vec<_>>();

    debug!(columns = headers.len(), rows = rows.len(), "parsed listings table");
    ListingTable::new(headers, rows)
}

/// Read and parse a listings file.
pub async fn read_table(path: impl AsRef<Path>) -> std::io::Result<ListingTable> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(parse(&text))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quotes {
    /// Header mode: quote characters stay in the field and only the outer
    /// pair is stripped afterwards.
    Keep,
    /// Row mode: quote characters are consumed and `""` inside a quoted
    /// section becomes a literal `"`.
    Unescape,
}

/// Single-pass scanner splitting on commas outside quotes.
///
/// The in-quotes flag carries across field boundaries: an unbalanced quote in
/// one field swallows the commas of every later field on the line.
fn split_fields(line: &str, mode: Quotes) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if mode == Quotes::Unescape && in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                    continue;
                }
                in_quotes = !in_quotes;
                if mode == Quotes::Keep {
                    current.push(c);
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

fn strip_outer_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}
