//! `gilded-rose-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the quality bounds shared by every item category and the domain error model.

pub mod error;
pub mod quality;

pub use error::{DomainError, DomainResult};
pub use quality::{MAX_QUALITY, MIN_QUALITY};
