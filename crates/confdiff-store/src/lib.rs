//! Permalink storage for confdiff.
//!
//! A permalink captures the two config texts of a comparison so it can be
//! reopened later from a short shareable id. Entries carry a creation
//! timestamp and are subject to a time-to-live and a capacity cap.
//!
//! # Storage Backends
//!
//! All backends implement the [`PermalinkStore`] trait:
//!
//! - [`InMemoryPermalinkStore`] -- `HashMap`-based store with TTL and
//!   capacity enforcement
//!
//! # Design Rules
//!
//! 1. Ids are short, URL-safe, and generated fresh on every save.
//! 2. Expired entries read as absent; their space is reclaimed on writes
//!    and explicit sweeps.
//! 3. A full store rejects new saves instead of evicting live entries.
//! 4. Concurrent reads are always safe.

pub mod error;
pub mod memory;
pub mod permalink;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryPermalinkStore, DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECS};
pub use permalink::{generate_id, Permalink, ID_ALPHABET, ID_LENGTH};
pub use traits::PermalinkStore;
