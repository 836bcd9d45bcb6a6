//! Application services (use cases).
//!
//! These services pull batches from the ports and run them through the
//! domain pipeline.

pub mod board;

pub use board::{Board, Ranking};
