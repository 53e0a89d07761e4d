//! Encoding primitives for Salesforce IDs.

pub mod base62;
pub mod checksum;

pub use checksum::{id15_to_18, suffix_for};
