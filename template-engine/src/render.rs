use regex::{NoExpand, Regex};
use std::collections::BTreeMap;

/// Substitute supplied values into template text.
///
/// For each `(key, value)` pair, every `{{ key }}` occurrence (optional
/// whitespace around the key) is replaced with `value`. Placeholders with no
/// matching key are left as literal text; keys with no matching placeholder
/// are silently ignored. No schema validation happens here and defaults are
/// never applied.
///
/// Substitution is sequential per pair, not a single pass over the text: a
/// value that itself contains another placeholder's literal token will be
/// re-substituted when that later pair is processed. The `BTreeMap` makes
/// the pair order (and therefore that edge case) deterministic.
pub fn render_template(content: &str, values: &BTreeMap<String, String>) -> String {
    let mut rendered = content.to_string();

    for (key, value) in values {
        let pattern = format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(key));
        let matcher = match Regex::new(&pattern) {
            Ok(re) => re,
            Err(_) => continue,
        };
        rendered = matcher
            .replace_all(&rendered, NoExpand(value.as_str()))
            .into_owned();
    }

    rendered
}
