//! Factory modules for building infrastructure components.
//!
//! # Submodules
//!
//! - [`source`] - Price and balance source construction

pub mod source;
