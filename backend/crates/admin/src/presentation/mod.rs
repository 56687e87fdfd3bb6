//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and the gate middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AdminAppState;
pub use middleware::{AdminGateState, admin_gate};
pub use router::{admin_router, admin_router_generic};
