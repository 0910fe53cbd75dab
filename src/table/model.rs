use std::collections::HashMap;

use super::{ADDRESS, LISTING_LINK, MAILING_ADDRESS, OWNER_NAME};

/// One listing: column name to value. Columns other than the owner fields are
/// opaque and carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRow {
    fields: HashMap<String, String>,
}

impl ListingRow {
    /// Build a row by zipping values against headers. Missing trailing values
    /// become empty strings, surplus values are dropped.
    pub fn from_values(headers: &[String], values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let fields = headers
            .iter()
            .map(|h| (h.clone(), values.next().unwrap_or_default()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        self.fields.insert(column.to_string(), value.into());
    }

    pub fn address(&self) -> &str {
        self.get(ADDRESS)
    }

    /// Listing link, if the row has a non-empty one.
    pub fn listing_link(&self) -> Option<&str> {
        Some(self.get(LISTING_LINK)).filter(|s| !s.is_empty())
    }

    pub fn owner_name(&self) -> &str {
        self.get(OWNER_NAME)
    }

    pub fn mailing_address(&self) -> &str {
        self.get(MAILING_ADDRESS)
    }

    /// True when both owner fields are already filled in.
    pub fn has_owner_info(&self) -> bool {
        !self.owner_name().is_empty() && !self.mailing_address().is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ListingRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A parsed listings file. Header order and row order are those of the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingTable {
    pub headers: Vec<String>,
    pub rows: Vec<ListingRow>,
}

impl ListingTable {
    pub fn new(headers: Vec<String>, rows: Vec<ListingRow>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Append `column` to the header if absent, giving every row an empty value.
    /// Returns whether the column was added.
    pub fn ensure_column(&mut self, column: &str) -> bool {
        if self.headers.iter().any(|h| h == column) {
            return false;
        }
        self.headers.push(column.to_string());
        for row in &mut self.rows {
            if !row.fields.contains_key(column) {
                row.set(column, "");
            }
        }
        true
    }
}
