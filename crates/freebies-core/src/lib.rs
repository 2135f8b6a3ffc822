//! Core types and trait definitions for the freebies tracker.
//!
//! Companies hand out freebies to devs. A freebie always points at exactly
//! one issuing company (fixed forever) and exactly one owning dev (which can
//! change hands). Everything else about who-gave-what-to-whom is derived from
//! the freebie rows.
//!
//! This crate is deliberately free of database dependencies. Storage backends
//! implement [`store::FreebieStore`].

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod entity;
pub mod error;
pub mod ops;
pub mod relations;
pub mod store;

pub use error::{Error, Result};
