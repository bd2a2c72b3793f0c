//! The FAQ knowledge base and its keyword search.

use serde::{Deserialize, Serialize};

/// Company blurb shown at the top of the knowledge base.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub tagline: String,
}

/// One service category the company offers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// One question/answer pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// The externally maintained FAQ data set.
///
/// Read-only to the engine; the backing file is re-parsed on every lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqData {
    #[serde(default)]
    pub company: Option<CompanyInfo>,
    #[serde(default)]
    pub services: Vec<ServiceOffering>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

/// Query words at or below this length are ignored during matching.
const MIN_KEYWORD_LEN: usize = 3;

impl FaqData {
    /// Simple keyword search over the FAQ questions.
    ///
    /// Case-insensitive: the first FAQ whose question contains any query
    /// word longer than three characters wins. Returns `None` when nothing
    /// matches; the caller composes the "let me follow up" response.
    pub fn search(&self, query: &str) -> Option<&str> {
        let query = query.to_lowercase();
        let keywords: Vec<&str> = query
            .split_whitespace()
            .filter(|w| w.len() > MIN_KEYWORD_LEN)
            .collect();

        self.faqs
            .iter()
            .find(|faq| {
                let question = faq.question.to_lowercase();
                keywords.iter().any(|word| question.contains(word))
            })
            .map(|faq| faq.answer.as_str())
    }

    /// Formats the whole data set as a briefing block for the
    /// language-generation collaborator.
    pub fn knowledge_base(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(company) = &self.company {
            parts.push(format!("COMPANY: {}", company.name));
            parts.push(format!("Overview: {}", company.overview));
            parts.push(format!("Tagline: {}", company.tagline));
            parts.push(String::new());
        }

        if !self.services.is_empty() {
            parts.push("SERVICES:".to_string());
            for service in &self.services {
                parts.push(format!("- {}: {}", service.category, service.description));
            }
            parts.push(String::new());
        }

        if !self.faqs.is_empty() {
            parts.push("COMMON QUESTIONS & ANSWERS:".to_string());
            for faq in &self.faqs {
                parts.push(format!("Q: {}", faq.question));
                parts.push(format!("A: {}", faq.answer));
                parts.push(String::new());
            }
        }

        parts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> FaqData {
        FaqData {
            company: Some(CompanyInfo {
                name: "Acme Services".to_string(),
                overview: "Global consulting.".to_string(),
                tagline: "We build it.".to_string(),
            }),
            services: vec![ServiceOffering {
                category: "Cloud".to_string(),
                description: "Migration and operations.".to_string(),
            }],
            faqs: vec![
                FaqEntry {
                    question: "What industries do you serve?".to_string(),
                    answer: "Finance, healthcare, and retail.".to_string(),
                },
                FaqEntry {
                    question: "Do you offer cloud migration services?".to_string(),
                    answer: "Yes, end to end.".to_string(),
                },
            ],
        }
    }

    #[test]
    fn search_matches_on_long_keywords_only() {
        let data = data();
        // "cloud" (5 chars) matches the second FAQ's question.
        assert_eq!(data.search("tell me about cloud"), Some("Yes, end to end."));
        // Every word is too short to match anything.
        assert_eq!(data.search("do you"), None);
    }

    #[test]
    fn search_returns_first_matching_faq() {
        let data = data();
        // "serve" appears in the first question; first match wins even
        // though later questions might match too.
        assert_eq!(
            data.search("which industries do you serve"),
            Some("Finance, healthcare, and retail.")
        );
    }

    #[test]
    fn search_misses_return_none() {
        assert_eq!(data().search("quantum computing roadmap"), None);
    }

    #[test]
    fn knowledge_base_lists_company_services_and_faqs() {
        let kb = data().knowledge_base();
        assert!(kb.contains("COMPANY: Acme Services"));
        assert!(kb.contains("- Cloud: Migration and operations."));
        assert!(kb.contains("Q: What industries do you serve?"));
    }

    #[test]
    fn empty_data_produces_an_empty_knowledge_base() {
        assert_eq!(FaqData::default().knowledge_base(), "");
    }
}
