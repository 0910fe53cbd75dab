use std::path::Path;

use tracing::info;

use super::model::ListingTable;

/// Serialize a table: header line, then one line per row, joined by `\n`.
/// Row values are looked up by header name.
pub fn to_csv_string(table: &ListingTable) -> String {
    let mut lines = Vec::with_capacity(table.rows.len() + 1);
    lines.push(join_line(table.headers.iter().map(String::as_str)));
    for row in &table.rows {
        lines.push(join_line(table.headers.iter().map(|h| row.get(h))));
    }
    lines.join("\n")
}

/// Write the table as the complete content of `path`, replacing any existing file.
pub async fn write_table(table: &ListingTable, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, to_csv_string(table)).await?;
    info!(path = %path.display(), rows = table.rows.len(), "wrote listings table");
    Ok(())
}

fn join_line<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values.map(escape).collect::<Vec<_>>().join(",")
}

fn escape(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
