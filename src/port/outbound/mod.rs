//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the data feeds the pipeline consumes.

pub mod source;
