//! Typed client for the UCSB course and club management backend.
//!
//! Entities are read through a shared [`cache::QueryCache`] keyed by GET
//! path, written through [`mutation::Mutation`]s that invalidate the keys
//! they affect, and surfaced through [`page`] bindings that report outcomes
//! as toasts and navigation intents.

pub mod app;
pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod mutation;
pub mod page;
pub mod request;
pub mod resources;
pub mod table;
pub mod telemetry;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;
