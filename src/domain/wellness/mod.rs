//! Wellness check-ins: the persisted entry shape, history briefing, and
//! summary formatting.

mod checkin;
mod context;

pub use checkin::CheckinEntry;
pub use context::{briefing_from_history, format_checkin_summary, FIRST_CHECKIN_BRIEFING};
