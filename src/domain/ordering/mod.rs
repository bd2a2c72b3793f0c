//! Coffee ordering: the menu vocabulary and order presentation.

mod menu;

pub use menu::{format_order_summary, order_vocabulary};
