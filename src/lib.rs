//! Management console for function definitions served by a REST API.
//!
//! DESIGN
//! ======
//! Layers, bottom up:
//! - `api`: the `FunctionsApi` trait and its reqwest implementation.
//! - `store`: in-memory record list with loading/error flags; every
//!   mutation is followed by a full refetch.
//! - `state`: list view (action menu, delete confirmation) and the
//!   edit/create form (draft, parameters, validation).
//! - `render` and `cli`: plain-text output and the clap front end.

pub mod api;
pub mod cli;
pub mod clock;
pub mod config;
pub mod model;
pub mod render;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;
