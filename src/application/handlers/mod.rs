//! The structured tool-call surface, one module per service.
//!
//! Each operation follows the same shape: a command struct in, a result
//! struct out, an explicit error enum whose `Display` is safe to speak
//! back to the user, and port dependencies behind `Arc<dyn ...>`. On a
//! storage failure the in-memory session record is left untouched so the
//! operation can be retried.

pub mod barista;
pub mod fraud;
pub mod grocery;
pub mod sdr;
pub mod tutor;
pub mod wellness;
