// Resource Catalog - API Core
//
// Server side of the curated resource catalog: topic lookups, the filtered
// and paginated resource listing, and the draft -> published lifecycle.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
