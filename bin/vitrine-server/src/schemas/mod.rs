//! Request and response shapes for the HTTP API.
//!
//! Store row types never cross the wire directly; each route converts them
//! through the response types here, and form payloads are validated and
//! re-encoded (delimited text fields into string lists) before any store
//! call is made.

pub mod auth;
pub mod dashboard;
pub mod fields;
pub mod messages;
pub mod portfolio;
pub mod public;
pub mod services;
