pub mod client;
pub mod errors;

pub use client::{endpoint, get_client};
pub use errors::RemoteError;
