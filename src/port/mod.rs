//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams where external collaborators plug into the pipeline.
//!
//! # Architecture
//!
//! ```text
//!  ┌──────────────┐      ┌─────────────────────────┐      ┌──────────────┐
//!  │ Price source │ ───▶ │ resolver ─▶ ranker      │ ◀─── │Balance source│
//!  │  (http/file) │      │ (domain, pure)          │      │    (file)    │
//!  └──────────────┘      └─────────────────────────┘      └──────────────┘
//!                                    │
//!                                    ▼
//!                              CLI (table/json)
//! ```
//!
//! # Available Ports
//!
//! - [`PriceSource`] - Batch of raw price observations
//! - [`BalanceSource`] - Batch of raw account balances

pub mod outbound;

pub use outbound::source::{BalanceSource, PriceSource};
