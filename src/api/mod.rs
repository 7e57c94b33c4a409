//! Functions API: REST access to `/api/functions`.
//!
//! DESIGN
//! ======
//! `FunctionsApi` is the seam between the console and the remote server.
//! `HttpFunctionsApi` speaks HTTP through `reqwest`; tests substitute a
//! recording mock. Every call returns a `Result` so the store decides what
//! to log and what to swallow.

pub mod http;
pub mod types;

pub use http::HttpFunctionsApi;
pub use types::{ApiError, FunctionsApi};
