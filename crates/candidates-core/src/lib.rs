//! Core types and trait definitions for the candidate listing service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Listing parameters are validated here into a [`query::ListQuery`]; storage
//! backends turn that into a count query and a fetch query over the same
//! filter.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod candidate;
pub mod error;
pub mod query;
pub mod store;

pub use error::{Error, Result};
