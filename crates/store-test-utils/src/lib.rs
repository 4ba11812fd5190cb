//! Shared test utilities for the form entity store workspace.
//!
//! This crate provides standardised fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`store`] — [`TestStore`](store::TestStore) builder backed by a temp dir

pub mod store;

pub use store::TestStore;
