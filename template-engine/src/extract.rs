use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::vocabulary::{default_value_for, friendly_label};

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{\{([^}]+)\}\}").unwrap();
}

/// UI-facing schema entry describing one placeholder in a template.
///
/// Persisted as JSON alongside the template and consumed by form-building
/// layers to drive dynamic input rendering. `default_value` is advisory
/// only; rendering never applies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigItem {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub default_value: String,
}

/// Scan template text for `{{ key }}` placeholders and synthesize one
/// [`ConfigItem`] per unique key.
///
/// The key is everything between the brace pairs, trimmed of surrounding
/// whitespace; no identifier syntax is enforced. First-occurrence order is
/// preserved and exact duplicates are dropped after the first. Text with no
/// well-formed placeholders yields an empty list.
pub fn extract_config_items(content: &str) -> Vec<ConfigItem> {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for capture in PLACEHOLDER_REGEX.captures_iter(content) {
        let key = capture[1].trim();
        if !seen.insert(key.to_string()) {
            continue;
        }
        items.push(ConfigItem {
            key: key.to_string(),
            label: friendly_label(key),
            item_type: "text".to_string(),
            default_value: default_value_for(key).to_string(),
        });
    }

    items
}
