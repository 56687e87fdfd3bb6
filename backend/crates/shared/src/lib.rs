//! Shared Kernel - Vocabulary shared by every marketplace crate
//!
//! This crate contains the "smallest core":
//! - The error taxonomy (`ErrorKind`) and the unified `AppError`
//! - Typed listing identifiers
//!
//! **Design Principle**: Only include things that have the same meaning
//! for the board, the admin surface and the API binary.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
