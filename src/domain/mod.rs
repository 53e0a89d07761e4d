//! Domain models for Salesforce ID enumeration.
//!
//! This module contains the ID type, counter sequences, enumeration requests
//! and the serializable analysis view.

pub mod dto;
pub mod id;
pub mod request;
pub mod sequence;

pub use dto::IdAnalysis;
pub use id::{COUNTER_LEN, MAX_COUNTER, PREFIX_LEN, Prefix, SalesforceId};
pub use request::{EnumerationRequest, StartFrom};
pub use sequence::{CounterSequence, generate};
