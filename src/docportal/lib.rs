//! # Docportal Architecture
//!
//! Docportal is a **host-agnostic rendering library** for a static
//! documentation portal: it loads two JSON collections (documents and
//! resources), renders them into HTML card fragments, and answers
//! search/filter queries over the in-memory collections. The CLI binary is
//! just one host; the same core can fill the slots of any HTML shell.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, prints to the terminal, exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Portal Facade (portal.rs)                                  │
//! │  - One instance per page view, owns the loaded collections  │
//! │  - Drives the page pipeline: stats, cards, search, filters  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                ┌─────────────┴─────────────┐
//!                ▼                           ▼
//! ┌──────────────────────────┐  ┌──────────────────────────────┐
//! │  Queries (queries/*.rs)  │  │  Renderer (html/)            │
//! │  - Pure functions over   │  │  - Record → HTML fragment    │
//! │    slices, no I/O        │  │  - RenderTarget abstracts    │
//! │                          │  │    the host page slots       │
//! └──────────────────────────┘  └──────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - Abstract DataSource trait                                │
//! │  - FileSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `portal.rs` inward (portal, queries, html), code takes regular Rust
//! arguments, returns regular Rust types, and never touches
//! stdout/stderr/the filesystem. Loading goes through [`source::DataSource`]
//! and rendering goes through [`html::page::RenderTarget`], so both ends can
//! be swapped out in tests.
//!
//! ## Degraded, Not Crashed
//!
//! The only error class in this system is a failed load of one of the two
//! collections. The portal records a warning and carries on with that
//! collection empty; every query and render path tolerates an empty
//! collection.
//!
//! ## Module Overview
//!
//! - [`portal`]: The page-view facade, entry point for all operations
//! - [`queries`]: Search, filter, stats, and section logic
//! - [`html`]: Card templates, escaping, and the slot abstraction
//! - [`source`]: Collection loading abstraction and implementations
//! - [`model`]: Core data types (`Document`, `Resource`, `Section`)
//! - [`config`]: Data directory configuration
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod html;
pub mod model;
pub mod portal;
pub mod queries;
pub mod source;
