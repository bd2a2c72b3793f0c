//! Foundation layer: identifiers, the service enumeration, and shared
//! validation errors used across the domain.

mod errors;
mod ids;
mod service;

pub use errors::ValidationError;
pub use ids::InteractionId;
pub use service::ServiceKind;
