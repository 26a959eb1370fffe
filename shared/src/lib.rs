//! Shared types and models for the Farm Advisory Platform
//!
//! This crate contains types shared between the advisory engine and the
//! surrounding application layers (persistence, UI, notification delivery).

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
