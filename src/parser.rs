//! Line Parser
//!
//! Turns free text typed into the add form into `(name, quantity)` pairs.
//! Quantities are written after the name as `name * 3` or `name (3)`.

use std::sync::LazyLock;

use regex::Regex;

use crate::category;

static QUANTITY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.*?)\s*(?:\*\s*(?P<star>[+-]?\d+)|\(\s*(?P<paren>[+-]?\d+)\s*\))$")
        .expect("quantity pattern is valid")
});

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub name: String,
    pub quantity: u32,
    /// Set only when categorization is requested
    pub category: Option<&'static str>,
}

/// Parse a single line. Never fails: lines without a recognized quantity
/// suffix keep their whole text as the name and quantity 1.
pub fn parse_line(line: &str) -> ParsedLine {
    let trimmed = line.trim();
    let Some(caps) = QUANTITY_SUFFIX.captures(trimmed) else {
        return ParsedLine { name: trimmed.to_string(), quantity: 1, category: None };
    };

    let name = caps.name("name").map(|m| m.as_str().trim()).unwrap_or_default();
    if name.is_empty() {
        // "* 3" or "(3)" alone: nothing to strip the quantity from
        return ParsedLine { name: trimmed.to_string(), quantity: 1, category: None };
    }

    let digits = caps
        .name("star")
        .or_else(|| caps.name("paren"))
        .map(|m| m.as_str())
        .unwrap_or_default();

    ParsedLine {
        name: name.to_string(),
        quantity: clamp_quantity(digits),
        category: None,
    }
}

/// Parse a line and assign its category from the keyword table
pub fn parse_line_categorized(line: &str) -> ParsedLine {
    let mut parsed = parse_line(line);
    parsed.category = Some(category::categorize(&parsed.name));
    parsed
}

/// Parse multi-line input: blank lines are dropped, order is preserved
pub fn parse_lines(text: &str, categorize: bool) -> Vec<ParsedLine> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| if categorize { parse_line_categorized(line) } else { parse_line(line) })
        .collect()
}

fn clamp_quantity(digits: &str) -> u32 {
    match digits.parse::<i64>() {
        Ok(q) if q > 0 => u32::try_from(q).unwrap_or(u32::MAX),
        _ => 1,
    }
}
