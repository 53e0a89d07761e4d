//! Service layer module.
//!
//! Contains ID composition, analysis and the enumeration driver.

pub mod analyzer;
pub mod composer;
pub mod enumerate;

pub use analyzer::analyze;
pub use composer::{ComposedId, IdComposer, compose};
pub use enumerate::{
    EnumerationDriver, EnumerationOptions, EnumerationSummary, ExecutionMode, drive,
};
