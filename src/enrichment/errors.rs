use std::path::PathBuf;
use thiserror::Error;

/// Failures that end an enrichment run. Per-row lookup failures never show up
/// here; they are counted in `EnrichmentStats::unresolved`.
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
