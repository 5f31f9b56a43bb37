//! Org Engine library crate.
//!
//! This crate exposes an in-memory organisation directory and its
//! derived workforce metrics as reusable modules.  External
//! applications may depend on the `org_engine` crate, own a
//! [`directory::Directory`] value directly and query it through
//! `metrics::derive_metrics`, or embed the HTTP surface via
//! `api::build_router`.

pub mod api;
pub mod directory;
pub mod metrics;
pub mod models;
pub mod seed;
pub mod snapshot;
