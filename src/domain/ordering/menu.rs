//! The coffee menu vocabulary and order summary formatting.

use crate::domain::extraction::{
    AliasGroup, Category, ChoiceCategory, KeywordCategory, PriorityCategory, Vocabulary,
};
use crate::domain::record::SessionRecord;

const DRINKS: ChoiceCategory = ChoiceCategory {
    field: "drink_type",
    entries: &[
        ("latte", "Latte"),
        ("cappuccino", "Cappuccino"),
        ("espresso", "Espresso"),
        ("americano", "Americano"),
        ("mocha", "Mocha"),
        ("macchiato", "Macchiato"),
        ("flat white", "Flat White"),
    ],
};

// Branch order is load-bearing: small-group aliases are checked before
// medium before large, so "small venti" resolves small.
const SIZES: PriorityCategory = PriorityCategory {
    field: "size",
    groups: &[
        AliasGroup {
            aliases: &["small", "tall"],
            canonical: "small",
        },
        AliasGroup {
            aliases: &["medium", "grande"],
            canonical: "medium",
        },
        AliasGroup {
            aliases: &["large", "venti"],
            canonical: "large",
        },
    ],
};

// Dictionary order is the resolution order; "no milk" must stay last.
const MILKS: ChoiceCategory = ChoiceCategory {
    field: "milk",
    entries: &[
        ("whole", "whole milk"),
        ("skim", "skim milk"),
        ("oat", "oat milk"),
        ("almond", "almond milk"),
        ("soy", "soy milk"),
        ("coconut", "coconut milk"),
        ("no milk", "no milk"),
    ],
};

const EXTRAS: KeywordCategory = KeywordCategory {
    field: "extras",
    entries: &[
        ("whipped cream", "whipped cream"),
        ("extra shot", "extra shot"),
        ("vanilla", "vanilla syrup"),
        ("caramel", "caramel syrup"),
        ("hazelnut", "hazelnut syrup"),
        ("sugar", "sugar"),
        ("honey", "honey"),
    ],
};

const ORDER_VOCABULARY: Vocabulary = Vocabulary {
    categories: &[
        Category::Choice(DRINKS),
        Category::Priority(SIZES),
        Category::Choice(MILKS),
        Category::Keywords(EXTRAS),
    ],
};

/// The extraction vocabulary for coffee orders.
pub fn order_vocabulary() -> &'static Vocabulary {
    &ORDER_VOCABULARY
}

/// Human-readable one-line summary of an order record.
///
/// Produces e.g. "medium Latte with oat milk and whipped cream for Sam";
/// unset fields are simply skipped.
pub fn format_order_summary(record: &SessionRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(size) = record.text("size") {
        parts.push(size.to_owned());
    }
    if let Some(drink) = record.text("drink_type") {
        parts.push(drink.to_owned());
    }
    if let Some(milk) = record.text("milk") {
        parts.push(format!("with {}", milk));
    }
    let extras = record.list("extras");
    if !extras.is_empty() {
        parts.push(format!("and {}", extras.join(", ")));
    }

    let mut summary = parts.join(" ");
    if let Some(name) = record.text("name") {
        summary = format!("{} for {}", summary, name);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RecordSchema;

    #[test]
    fn summary_reads_like_a_barista_callout() {
        let mut record = SessionRecord::new(RecordSchema::order());
        record.set_text("drink_type", "Latte").unwrap();
        record.set_text("size", "medium").unwrap();
        record.set_text("milk", "oat milk").unwrap();
        record.append_list("extras", "whipped cream").unwrap();
        record.append_list("extras", "honey").unwrap();
        record.set_text("name", "Sam").unwrap();

        assert_eq!(
            format_order_summary(&record),
            "medium Latte with oat milk and whipped cream, honey for Sam"
        );
    }

    #[test]
    fn summary_skips_unset_fields() {
        let mut record = SessionRecord::new(RecordSchema::order());
        record.set_text("drink_type", "Espresso").unwrap();
        assert_eq!(format_order_summary(&record), "Espresso");
    }
}
