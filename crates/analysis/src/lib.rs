//! Query layer over the team statistics table.
//!
//! [`API`] answers the fixed read-only queries the HTTP routes expose;
//! [`CLI`] wraps it in an interactive prompt.
mod api;
mod cli;
mod query;

pub use api::*;
pub use cli::*;
pub use query::*;
