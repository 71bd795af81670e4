//! Client library for the Meridian ERP REST API.
//!
//! One module per business entity lives under [`entities`], each exposing
//! record types, a typed search-criteria builder, and a service whose
//! methods map 1:1 to backend endpoints (CRUD, nested collections,
//! RPC-style actions). Search criteria compile to the backend's filter
//! grammar through the `meridian-search` crate; when a criteria object
//! produces no clause, the `q` parameter is omitted and the backend
//! returns an unfiltered listing.
//!
//! ```rust,ignore
//! use meridian_client::{ApiClient, ClientConfig, ListOptions};
//! use meridian_client::entities::items::ItemCriteria;
//! use meridian_search::{NumberFieldValue, StringFieldValue};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), meridian_client::ApiError> {
//!     let client = ApiClient::new(ClientConfig::new(
//!         "https://erp.example.com/api/v1",
//!         "mk_live_...",
//!     ))?;
//!
//!     let criteria = ItemCriteria::new()
//!         .code(StringFieldValue::like("AB*"))
//!         .vat_rate(NumberFieldValue::between(1, 20));
//!     let page = client
//!         .items()
//!         .search(&criteria, &ListOptions::new().limit(50))
//!         .await?;
//!     println!("{} matching items", page.meta.total);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod errors;
mod params;
mod response;

pub mod entities;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use errors::{ApiError, Result};
pub use params::ListOptions;
pub use response::{ApiResponse, Meta, ResultData};
