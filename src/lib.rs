pub mod api;
pub mod config;
pub mod enrichment;
pub mod owner;
pub mod pacing;
pub mod platform;
pub mod remote;
pub mod table;
pub mod validation;
