//! Category Detection
//!
//! Keyword-based categorization of item names and the quick-pick catalog
//! built from the same table.

/// Category for names that match no keyword
pub const GENERAL: &str = "general";

/// Bucket purchased items are moved into
pub const TAKEN: &str = "taken";

/// Category → keywords, in match priority order.
///
/// A keyword matches when it is a substring of the lower-cased name; the
/// first category with a matching keyword wins.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "produce",
        &[
            "apple", "banana", "orange", "lemon", "tomato", "cucumber", "potato", "onion",
            "garlic", "carrot", "pepper", "lettuce", "avocado", "grape", "strawberr",
            "melon", "מלפפון", "עגבני", "תפוח", "בננה", "בצל",
        ],
    ),
    (
        "dairy",
        &[
            "milk", "cheese", "yogurt", "yoghurt", "butter", "cream", "egg", "חלב",
            "גבינ", "יוגורט", "חמאה", "ביצ",
        ],
    ),
    (
        "bakery",
        &["bread", "bagel", "bun", "pita", "croissant", "cake", "לחם", "פיתה", "חלה"],
    ),
    (
        "meat",
        &["chicken", "beef", "turkey", "fish", "salmon", "tuna", "sausage", "עוף", "בשר", "דג"],
    ),
    (
        "pantry",
        &[
            "rice", "pasta", "flour", "sugar", "salt", "oil", "coffee", "tea", "cereal",
            "beans", "אורז", "פסטה", "קמח", "סוכר", "שמן", "קפה",
        ],
    ),
    (
        "drinks",
        &["water", "juice", "soda", "cola", "beer", "wine", "מים", "מיץ", "בירה", "יין"],
    ),
    (
        "household",
        &[
            "soap", "detergent", "shampoo", "toothpaste", "tissue", "paper", "sponge",
            "bleach", "סבון", "נייר", "שמפו",
        ],
    ),
];

/// Categorize an item name; `general` when nothing matches
pub fn categorize(name: &str) -> &'static str {
    let lowered = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(GENERAL)
}

/// Display order of a category label: table order, then `general`, then `taken`.
/// Unknown labels sort just before `taken`.
pub fn category_rank(category: &str) -> usize {
    if let Some(pos) = CATEGORY_KEYWORDS.iter().position(|(c, _)| *c == category) {
        return pos;
    }
    match category {
        GENERAL => CATEGORY_KEYWORDS.len(),
        TAKEN => CATEGORY_KEYWORDS.len() + 2,
        _ => CATEGORY_KEYWORDS.len() + 1,
    }
}

/// One quick-pick group: a category and the names offered under it
#[derive(Debug, Clone, PartialEq)]
pub struct QuickPickGroup {
    pub category: &'static str,
    pub names: Vec<&'static str>,
}

/// Quick-pick catalog: whole-word keywords of each category.
///
/// Stems such as `strawberr` and non-Latin keywords are matching aids, not
/// display names, so only keywords that look like complete ASCII words are
/// offered.
pub fn quick_picks() -> Vec<QuickPickGroup> {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| QuickPickGroup {
            category: *category,
            names: keywords
                .iter()
                .copied()
                .filter(|k| k.is_ascii() && !STEMS.contains(k))
                .collect(),
        })
        .filter(|group| !group.names.is_empty())
        .collect()
}

const STEMS: &[&str] = &["strawberr"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_keywords() {
        assert_eq!(categorize("Cucumber"), "produce");
        assert_eq!(categorize("Almond milk"), "dairy");
        assert_eq!(categorize("Whole wheat bread"), "bakery");
        assert_eq!(categorize("חלב שקדים"), "dairy");
        assert_eq!(categorize("batteries"), GENERAL);
    }

    #[test]
    fn test_first_category_wins() {
        // "apple juice" matches produce ("apple") before drinks ("juice")
        assert_eq!(categorize("apple juice"), "produce");
    }

    #[test]
    fn test_category_rank_order() {
        assert_eq!(category_rank("produce"), 0);
        assert!(category_rank("household") < category_rank(GENERAL));
        assert!(category_rank(GENERAL) < category_rank("custom"));
        assert!(category_rank("custom") < category_rank(TAKEN));
    }

    #[test]
    fn test_quick_picks_skip_stems() {
        let picks = quick_picks();
        assert_eq!(picks[0].category, "produce");
        assert!(picks[0].names.contains(&"banana"));
        assert!(!picks[0].names.contains(&"strawberr"));
        assert!(picks.iter().all(|g| g.names.iter().all(|n| n.is_ascii())));
        assert!(picks.iter().all(|g| categorize(g.names[0]) == g.category));
    }
}
