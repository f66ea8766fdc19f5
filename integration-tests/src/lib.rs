/// Loading of live-catalog credentials.
pub mod config;
