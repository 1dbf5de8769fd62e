//! Client for the hosted record store backing the vitrine site.
//!
//! The store is an external service exposing named collections of rows over
//! a PostgREST-style REST surface.  This crate wraps the five operations the
//! site needs — filtered select, insert, update-by-id, delete-by-id and
//! exact count — behind [`RecordStore`], and defines the three row types
//! (`services`, `portfolio`, `messages`) the store holds.
//!
//! Row identifiers and creation timestamps are assigned by the store, never
//! by this code.

mod client;
mod entities;
mod error;
mod query;

pub use client::RecordStore;
pub use entities::{
    Message, NewMessage, NewProject, NewService, Project, ProjectStatus, Service, MESSAGES,
    PORTFOLIO, SERVICES,
};
pub use error::StoreError;
pub use query::{Direction, Filter, Order, SelectQuery};
