//! Data transfer objects for API communication.
//!
//! Request and response types for the statistics API, serializable via `serde`.
//! These types bridge the gap between SQLite rows and JSON payloads.
mod frame;
mod request;
mod response;

pub use frame::*;
pub use request::*;
pub use response::*;
