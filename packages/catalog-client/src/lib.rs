//! Client side of the resource catalog.
//!
//! - [`SelectionState`]: the set of chosen filter ids, observable through a
//!   watch channel.
//! - [`HttpCatalogClient`]: typed access to `/api/resources` and `/api/topics`.
//! - [`CatalogView`]: refetches the catalog whenever the selection or the
//!   page parameters change, keeping only the latest response.

pub mod client;
pub mod selection;
pub mod types;
pub mod view;

pub use client::{CatalogApi, CatalogQuery, ClientError, HttpCatalogClient};
pub use selection::SelectionState;
pub use types::{CatalogPage, Resource, Topic};
pub use view::{CatalogParams, CatalogView, ViewState};
