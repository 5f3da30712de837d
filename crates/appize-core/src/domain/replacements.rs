//! The Replacement Map: placeholder key -> fully-stringified value.
//!
//! Built fresh per platform invocation, in a defined order, and never mutated
//! after construction; the substitution engine only reads it. Booleans render
//! as lowercase `true`/`false`, numbers as their literal decimal text.

use std::collections::BTreeMap;

/// An ordered placeholder key/value table.
///
/// Order matters: literal replacements are applied in insertion order, so a
/// caller controls overlapping-literal behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: Vec<(String, String)>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key with an already-stringified value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.entries.push((key.to_string(), value.into()));
        self
    }

    /// Insert a boolean, rendered lowercase.
    pub fn set_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.set(key, if value { "true" } else { "false" })
    }

    /// Insert a number, rendered as its decimal text.
    pub fn set_num(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.set(key, value.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The literal template token for a key: `{{KEY}}`.
    pub fn token(key: &str) -> String {
        format!("{{{{{key}}}}}")
    }
}

/// Render free-form build options as Gradle key/value lines.
///
/// Booleans render lowercase, numbers as literal text, and bare strings are
/// quoted unless the value already carries surrounding double quotes. Each
/// line is indented to sit inside the `defaultConfig` block; a trailing
/// newline is appended when any line was produced. Nulls, arrays and nested
/// mappings have no Gradle line form and are dropped.
pub fn render_gradle_configs(configs: &BTreeMap<String, serde_json::Value>) -> String {
    let mut lines = Vec::new();
    for (key, value) in configs {
        let rendered = match value {
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => {
                if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                    s.clone()
                } else {
                    format!("\"{s}\"")
                }
            }
            _ => {
                tracing::warn!(key, "Unsupported gradle_custom_configs value type, skipping");
                continue;
            }
        };
        lines.push(format!("        {key} = {rendered}"));
    }

    if lines.is_empty() {
        String::new()
    } else {
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn preserves_insertion_order() {
        let mut map = ReplacementMap::new();
        map.set("B", "2").set("A", "1").set("C", "3");
        let keys: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["B", "A", "C"]);
    }

    #[test]
    fn renders_scalars() {
        let mut map = ReplacementMap::new();
        map.set_bool("FULLSCREEN", true)
            .set_bool("SUPPORT_ZOOM", false)
            .set_num("MIN_SDK_VERSION", 21u32);
        assert_eq!(map.get("FULLSCREEN"), Some("true"));
        assert_eq!(map.get("SUPPORT_ZOOM"), Some("false"));
        assert_eq!(map.get("MIN_SDK_VERSION"), Some("21"));
    }

    #[test]
    fn token_form() {
        assert_eq!(ReplacementMap::token("APP_NAME"), "{{APP_NAME}}");
    }

    #[test]
    fn gradle_lines_quote_bare_strings() {
        let mut configs = BTreeMap::new();
        configs.insert("enableX".into(), json!(true));
        configs.insert("retries".into(), json!(3));
        configs.insert("label".into(), json!("v1"));

        let block = render_gradle_configs(&configs);
        assert!(block.contains("enableX = true"));
        assert!(block.contains("retries = 3"));
        assert!(block.contains("label = \"v1\""));
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn gradle_lines_keep_prequoted_strings() {
        let mut configs = BTreeMap::new();
        configs.insert("flavor".into(), json!("\"prod\""));
        let block = render_gradle_configs(&configs);
        assert!(block.contains("flavor = \"prod\""));
        assert!(!block.contains("\"\"prod\"\""));
    }

    #[test]
    fn gradle_lines_empty_when_no_configs() {
        assert_eq!(render_gradle_configs(&BTreeMap::new()), "");
    }

    #[test]
    fn gradle_lines_drop_unrepresentable_values() {
        let mut configs = BTreeMap::new();
        configs.insert("bad".into(), json!(["a", "b"]));
        configs.insert("ok".into(), json!(1));
        let block = render_gradle_configs(&configs);
        assert!(!block.contains("bad"));
        assert!(block.contains("ok = 1"));
    }
}
