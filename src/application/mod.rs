//! Application layer: the per-interaction router and the structured
//! tool-call handlers.

pub mod handlers;
pub mod router;

pub use router::{ActiveSession, Router, RouterError, RoutingPolicy, TutorFlow};
