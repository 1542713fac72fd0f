//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema that drives the generator
//! and helpers to load configuration from disk.

mod load;
mod schema;

pub use schema::*;
