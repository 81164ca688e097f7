//! Variable classification.
//!
//! Maps a variable's name and string-valued attributes to a semantic
//! category by searching an ordered pattern table. The table order defines
//! priority: the first pattern that matches wins and later entries are never
//! consulted. Failing to match is a normal outcome, not an error.

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dataset::AttributeValue;

/// A short label classifying a variable's physical quantity.
///
/// The built-in set covers common ocean-model quantities (`temp`, `salt`,
/// `vel`, ...), but the set is open: scoped overrides may introduce new
/// categories at runtime. "Unclassified" is represented by `None` in an
/// `Option<Category>`, never by a reserved tag value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of the ordered pattern table.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    /// The category this pattern selects
    pub category: Category,
    /// Regex searched (not anchored) against names and attribute values
    pub pattern: Regex,
}

impl PatternEntry {
    pub fn new(category: impl Into<Category>, pattern: Regex) -> Self {
        Self {
            category: category.into(),
            pattern,
        }
    }
}

/// Classify a variable against an ordered pattern table.
///
/// For each entry, the variable name (lowercased, when present) is searched
/// first, then each string-valued attribute as-is. Non-string attributes are
/// skipped silently. Patterns themselves stay case-sensitive, so a pattern
/// with an uppercase literal (e.g. `Celsius`) can only ever match attribute
/// values.
pub(crate) fn match_category(
    patterns: &[PatternEntry],
    name: Option<&str>,
    attributes: &HashMap<String, AttributeValue>,
) -> Option<Category> {
    let lowered = name.map(str::to_lowercase);

    for entry in patterns {
        if let Some(lowered) = lowered.as_deref() {
            if entry.pattern.is_match(lowered) {
                debug!(
                    category = entry.category.as_str(),
                    pattern = entry.pattern.as_str(),
                    text = lowered,
                    "pattern matched variable name"
                );
                return Some(entry.category.clone());
            }
        }
        for (attr, value) in attributes {
            if let AttributeValue::Text(text) = value {
                if entry.pattern.is_match(text) {
                    debug!(
                        category = entry.category.as_str(),
                        pattern = entry.pattern.as_str(),
                        attribute = attr.as_str(),
                        text = text.as_str(),
                        "pattern matched attribute value"
                    );
                    return Some(entry.category.clone());
                }
            }
        }
    }

    info!(name = name.unwrap_or("<unnamed>"), "no category pattern matched");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: &str, pattern: &str) -> PatternEntry {
        PatternEntry::new(tag, Regex::new(pattern).unwrap())
    }

    fn text_attrs(pairs: &[(&str, &str)]) -> HashMap<String, AttributeValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), AttributeValue::Text(v.to_string())))
            .collect()
    }

    #[test]
    fn test_first_match_wins() {
        // Both patterns match "sea_water_speed"; table order decides.
        let table = vec![entry("vel", "speed|velocity"), entry("energy", "speed")];
        let got = match_category(&table, Some("sea_water_speed"), &HashMap::new());
        assert_eq!(got, Some(Category::new("vel")));

        let reversed = vec![entry("energy", "speed"), entry("vel", "speed|velocity")];
        let got = match_category(&reversed, Some("sea_water_speed"), &HashMap::new());
        assert_eq!(got, Some(Category::new("energy")));
    }

    #[test]
    fn test_name_is_lowercased_before_matching() {
        let table = vec![entry("temp", "temp|Celsius")];
        // "TEMPERATURE" only matches because the name is lowercased first.
        let got = match_category(&table, Some("TEMPERATURE"), &HashMap::new());
        assert_eq!(got, Some(Category::new("temp")));

        // An uppercase literal in the pattern can never match a name.
        let got = match_category(&table, Some("degrees Celsius"), &HashMap::new());
        assert_eq!(got, None);
    }

    #[test]
    fn test_attribute_values_matched_verbatim() {
        let table = vec![entry("temp", "temp|Celsius")];
        let attrs = text_attrs(&[("units", "Celsius")]);
        let got = match_category(&table, None, &attrs);
        assert_eq!(got, Some(Category::new("temp")));
    }

    #[test]
    fn test_non_string_attributes_skipped() {
        let table = vec![entry("freq2", "1/s\\^2")];
        let mut attrs = text_attrs(&[("units", "1/s^2")]);
        attrs.insert("scale_factor".to_string(), AttributeValue::Number(2.0));
        attrs.insert(
            "valid_range".to_string(),
            AttributeValue::NumberArray(vec![0.0, 1.0]),
        );
        let got = match_category(&table, None, &attrs);
        assert_eq!(got, Some(Category::new("freq2")));
    }

    #[test]
    fn test_absent_name_and_empty_attributes() {
        let table = vec![entry("temp", "temp")];
        assert_eq!(match_category(&table, None, &HashMap::new()), None);
    }

    #[test]
    fn test_no_match_returns_none() {
        let table = vec![entry("temp", "temp"), entry("salt", "salt|psu")];
        let got = match_category(&table, Some("foo"), &HashMap::new());
        assert_eq!(got, None);
    }
}
