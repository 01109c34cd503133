//! Config text parsing for confdiff.
//!
//! This crate turns raw multi-line `Key=Value` text into an insertion-ordered
//! [`ConfigMapping`]. Parsing is deliberately forgiving: blank lines and lines
//! without a usable `key=value` shape are dropped silently, and lookups of
//! absent keys yield the empty string. Values may embed `$Base$NAME$`
//! references to sibling keys, which are resolved exactly one level deep
//! against the freshly parsed values.
//!
//! # Key Types
//!
//! - [`ConfigMapping`] — Insertion-ordered key→value map parsed from text
//!
//! # Modules
//!
//! - [`mapping`] — The mapping type and the line parser
//! - [`resolve`] — `$Base$NAME$` reference scanning and substitution

pub mod mapping;
pub mod resolve;

pub use mapping::ConfigMapping;
pub use resolve::REF_MARKER;
