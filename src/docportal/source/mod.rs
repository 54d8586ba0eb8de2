//! # Source Layer
//!
//! This module defines the loading abstraction for the two portal
//! collections. The [`DataSource`] trait is the Rust-side stand-in for the
//! portal's two fixed JSON endpoints.
//!
//! ## Design Rationale
//!
//! Loading is abstracted behind a trait to:
//! - Enable **testing** with `InMemorySource` (inject collections or
//!   failures, no filesystem needed)
//! - Keep the portal facade **decoupled** from where the JSON lives
//!
//! Loaders return the collections instead of mutating shared state; the
//! [`crate::portal::Portal`] owns what they return.
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: Production source reading `docs.json` and
//!   `resources.json` from a data directory
//! - [`memory::InMemorySource`]: In-memory source for testing, with
//!   optional injected failures
//!
//! ## Failure Contract
//!
//! The two loads are independent: each either returns its full collection
//! or an error, and an error in one says nothing about the other. Callers
//! degrade a failed collection to empty; there is no retry.

use crate::error::Result;
use crate::model::{Document, Resource};

pub mod fs;
pub mod memory;

/// Abstract interface for loading the portal collections.
pub trait DataSource {
    /// Load the full document collection.
    fn load_documents(&self) -> Result<Vec<Document>>;

    /// Load the full resource collection.
    fn load_resources(&self) -> Result<Vec<Resource>>;
}
