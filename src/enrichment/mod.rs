//! Owner-information enrichment of a listings table.
//!
//! Rows are handled strictly one after another: each lookup finishes (or
//! fails) before the next starts, with the pacer's cooling period between
//! them. Nothing is written until the whole table has been processed.

pub mod errors;

pub use errors::EnrichError;

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::config::Config;
use crate::owner::{HttpOwnerLookup, LookupOutcome, LookupRequest, OwnerInfo, OwnerLookup};
use crate::pacing::{FixedDelay, Pacer};
use crate::table::{
    ListingRow, ListingTable, MAILING_ADDRESS, OWNER_NAME, read_table, write_table,
};

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EnrichmentStats {
    /// Rows in the input table.
    pub total: usize,
    /// Rows looked up or already complete.
    pub processed: usize,
    /// Owner fields filled in; a row can contribute two.
    pub updated: usize,
    /// Rows without an address.
    pub skipped: usize,
    /// Rows that already had both owner fields.
    pub already_complete: usize,
    /// Lookups that failed and left the row as it was.
    pub unresolved: usize,
}

impl fmt::Display for EnrichmentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total: {}, processed: {}, updated: {} (skipped: {}, already complete: {}, unresolved: {})",
            self.total,
            self.processed,
            self.updated,
            self.skipped,
            self.already_complete,
            self.unresolved
        )
    }
}

pub struct Enricher {
    lookup: Arc<dyn OwnerLookup>,
    pacer: Arc<dyn Pacer>,
    max_lookups: Option<usize>,
}

impl Enricher {
    pub fn new(lookup: Arc<dyn OwnerLookup>, pacer: Arc<dyn Pacer>) -> Self {
        Self {
            lookup,
            pacer,
            max_lookups: None,
        }
    }

    /// HTTP lookup and fixed-delay pacing as configured.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(HttpOwnerLookup::new(config.owner_lookup_url())),
            Arc::new(FixedDelay::new(config.enrich_delay())),
        )
        .with_max_lookups(config.max_lookups())
    }

    /// Stop issuing lookups after `max` of them. Later rows pass through as they are.
    pub fn with_max_lookups(mut self, max: Option<usize>) -> Self {
        self.max_lookups = max;
        self
    }

    /// Fill empty owner fields of `table` in place, in row order.
    pub async fn run(&self, table: &mut ListingTable) -> EnrichmentStats {
        if !table.headers.is_empty() {
            table.ensure_column(OWNER_NAME);
            table.ensure_column(MAILING_ADDRESS);
        }

        let total = table.rows.len();
        let mut stats = EnrichmentStats {
            total,
            ..Default::default()
        };
        let mut lookups = 0;

        info!("enriching {} listings", total);

        for (index, row) in table.rows.iter_mut().enumerate() {
            let line = index + 1;

            if row.address().trim().is_empty() {
                info!(row = line, "skipping row without address");
                stats.skipped += 1;
                continue;
            }

            if row.has_owner_info() {
                debug!(row = line, "owner info already present");
                stats.already_complete += 1;
                stats.processed += 1;
                continue;
            }

            if let Some(max) = self.max_lookups
                && lookups >= max
            {
                info!(
                    row = line,
                    "lookup limit of {} reached, leaving remaining rows untouched", max
                );
                break;
            }

            let request = LookupRequest::new(row.address(), row.listing_link());
            let outcome = self.lookup.lookup(&request).await;
            lookups += 1;

            if let LookupOutcome::Unresolved { reason } = &outcome {
                warn!(row = line, address = %request.address, "owner lookup unresolved: {}", reason);
                stats.unresolved += 1;
            }

            let filled = merge(row, outcome.into_owner_info());
            if filled > 0 {
                info!(row = line, address = %request.address, fields = filled, "owner info merged");
            }
            stats.updated += filled;
            stats.processed += 1;

            if line < total {
                self.pacer.pause().await;
            }
        }

        info!("enrichment finished: {}", stats);
        stats
    }

    /// Read `input`, enrich it and write the result to `output`.
    ///
    /// The output is written once, after every row has been handled. A missing
    /// input file fails before anything else happens.
    #[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
    pub async fn enrich_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<EnrichmentStats, EnrichError> {
        let mut table = read_table(input).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                EnrichError::InputNotFound(input.to_path_buf())
            } else {
                EnrichError::Read {
                    path: input.to_path_buf(),
                    source,
                }
            }
        })?;

        if table.is_empty() {
            warn!("input has no listing rows");
        }

        let stats = self.run(&mut table).await;

        write_table(&table, output)
            .await
            .map_err(|source| EnrichError::Write {
                path: output.to_path_buf(),
                source,
            })?;

        Ok(stats)
    }
}

/// Copy non-empty fetched values into empty owner fields. Returns the number
/// of fields filled.
fn merge(row: &mut ListingRow, info: OwnerInfo) -> usize {
    let mut filled = 0;
    for (column, value) in [
        (OWNER_NAME, info.owner_name),
        (MAILING_ADDRESS, info.mailing_address),
    ] {
        if !value.is_empty() && row.get(column).is_empty() {
            row.set(column, value);
            filled += 1;
        }
    }
    filled
}

/// `listings.csv` becomes `listings_with_owners.csv` in the same directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "listings".to_string());
    input.with_file_name(format!("{stem}_with_owners.csv"))
}
