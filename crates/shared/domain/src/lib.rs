//! Domain layer - Core business entities and validation errors.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! All types here are shared by the service and application crates.

pub mod constants;
pub mod error;
pub mod user;

pub use constants::*;
pub use error::{DomainResult, FieldError};
pub use user::{is_anniversary, User};
