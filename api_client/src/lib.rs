//! Typed client for the SupplyLine REST API, plus the in-memory store that
//! caches what the views render.

pub mod client;
pub mod error;
pub mod store;

mod admin;
mod auth;
mod calibration;
mod chemicals;
mod cycle_count;
mod export;
mod kits;
mod tools;
mod warehouses;

pub use client::SupplyLineClient;
pub use error::ApiError;
pub use export::{ExportFormat, ExportResource};
pub use store::{InventoryState, InventoryStore, Loadable, cancellable};
