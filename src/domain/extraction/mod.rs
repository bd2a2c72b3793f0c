//! Keyword-based slot extraction.
//!
//! Extraction is deliberately literal: vocabulary terms are matched as
//! case-insensitive substrings of the utterance, never tokenized or
//! stemmed. Anything smarter belongs to the language-model collaborator,
//! which reaches the record through structured tool calls instead.

mod extractor;
mod vocabulary;

pub use extractor::apply_vocabulary;
pub use vocabulary::{
    AliasGroup, Category, ChoiceCategory, KeywordCategory, PriorityCategory, Vocabulary,
};
