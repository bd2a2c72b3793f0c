//! Vocabulary model for slot extraction.
//!
//! A vocabulary is an ordered list of categories, one per extractable
//! field; resolution order across categories is fixed per service. Three
//! category shapes cover every service: fixed-order single choice,
//! priority-branched alias groups, and accumulating keyword lists.

/// A single-valued category scanned in fixed list order.
///
/// The first listed term found in the text wins and scanning stops; later
/// terms never override an earlier match regardless of position in the text.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceCategory {
    /// Record field this category fills.
    pub field: &'static str,
    /// `(needle, canonical)` pairs in resolution order.
    pub entries: &'static [(&'static str, &'static str)],
}

/// One branch of a [`PriorityCategory`]: any alias hit selects `canonical`.
#[derive(Debug, Clone, Copy)]
pub struct AliasGroup {
    pub aliases: &'static [&'static str],
    pub canonical: &'static str,
}

/// A single-valued category resolved by priority branching.
///
/// Groups are evaluated in declaration order and the first group with any
/// textual hit wins, even when a later group's alias also appears. This
/// reproduces the shipped branch order on purpose; see the sizing rules in
/// the order vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct PriorityCategory {
    pub field: &'static str,
    pub groups: &'static [AliasGroup],
}

/// A multi-valued category that accumulates every matching term.
///
/// Each hit appends its canonical value unless an equivalent entry is
/// already present in the record's list; there is no upper bound.
#[derive(Debug, Clone, Copy)]
pub struct KeywordCategory {
    pub field: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

/// One extraction category in a vocabulary's fixed resolution order.
#[derive(Debug, Clone, Copy)]
pub enum Category {
    Choice(ChoiceCategory),
    Priority(PriorityCategory),
    Keywords(KeywordCategory),
}

/// A service's complete extraction vocabulary, categories in resolution
/// order.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub categories: &'static [Category],
}
