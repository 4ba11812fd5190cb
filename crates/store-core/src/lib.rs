//! Typed repositories and multi-kind aggregation for the form entity store
//!
//! A [`TypedEntityRepository`] stores one entity kind as JSON files in its
//! own directory and serves reads through a shared
//! [`FreshnessCache`](store_cache::FreshnessCache). The [`EntityAggregator`]
//! combines one repository per kind into a single tree addressed by GUID.

pub mod aggregator;
pub mod error;
pub mod logging;
pub mod repository;
pub mod settings;
pub mod store;

pub use aggregator::{AggregatorOptions, EntityAggregator};
pub use error::{Error, Result};
pub use repository::TypedEntityRepository;
pub use settings::{KindSettings, StoreSettings};
pub use store::EntityStore;
