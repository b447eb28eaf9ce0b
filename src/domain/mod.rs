//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `campaign` - Campaign draft composition: wizard, validation, submission

pub mod campaign;
pub mod foundation;
