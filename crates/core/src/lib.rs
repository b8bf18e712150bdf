//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod entity;
pub mod error;
pub mod priced;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use priced::Priced;
