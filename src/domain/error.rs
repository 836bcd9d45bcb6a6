//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate inputs.
//! The resolver and ranker themselves never fail; only configuration-derived
//! tables carry invariants that can be violated.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use tokenboard::domain::error::DomainError;
//! use tokenboard::domain::ChainTiers;
//!
//! let mut table = BTreeMap::new();
//! table.insert("Broken".to_string(), i32::MIN);
//!
//! let result = ChainTiers::try_new(table);
//! assert!(matches!(result, Err(DomainError::TierAtFloor { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A tier value leaves no room for the unknown-chain sentinel below it.
    #[error("tier for chain {chain} is {value}; the unknown-chain priority must stay below every tier")]
    TierAtFloor {
        /// The chain carrying the offending tier.
        chain: String,
        /// The offending tier value.
        value: i32,
    },
}
