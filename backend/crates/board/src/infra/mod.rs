//! Infrastructure Layer
//!
//! Persistence implementations of the repository traits.

#[cfg(any(test, feature = "memory"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "memory"))]
pub use memory::MemoryBoardRepository;
pub use postgres::PgBoardRepository;
