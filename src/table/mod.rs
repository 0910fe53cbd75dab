pub mod model;
pub mod reader;
pub mod writer;

#[cfg(test)]
mod tests;

pub use model::{ListingRow, ListingTable};
pub use reader::{parse, read_table};
pub use writer::{to_csv_string, write_table};

/// Column holding the property address, the correlation key within a batch.
pub const ADDRESS: &str = "address";
pub const LISTING_LINK: &str = "listing_link";
pub const OWNER_NAME: &str = "owner_name";
pub const MAILING_ADDRESS: &str = "mailing_address";
