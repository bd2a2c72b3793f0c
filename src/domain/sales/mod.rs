//! Sales development: lead presentation and the FAQ knowledge base.

mod faq;
mod lead;

pub use faq::{CompanyInfo, FaqData, FaqEntry, ServiceOffering};
pub use lead::format_lead_summary;
