//! Shared test utilities for the code-region workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`docs`]: [`DocsFixture`] builder for a temporary docs site on disk

pub mod docs;

pub use docs::DocsFixture;
