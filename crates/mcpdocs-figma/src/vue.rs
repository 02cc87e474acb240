//! Vue template code generation.

use serde_json::Value;

use mcpdocs_catalog::{camelize_lower, Framework};

use crate::generator::{snippet_value, CodeGenerator, Props};

/// Emits `<PfBadge size="large" emphasized>Text</PfBadge>` tags.
///
/// The `text` prop becomes the element's content.
#[derive(Debug, Default, Clone, Copy)]
pub struct VueGenerator;

impl CodeGenerator for VueGenerator {
    fn framework(&self) -> Framework {
        Framework::Vue
    }

    /// `size="large"` is an assignment; a bare attribute such as `emphasized`
    /// means `true`.
    fn parse_snippet(&self, snippet: &str) -> Option<(String, Value)> {
        let snippet = snippet.trim();

        if let Some((name, value)) = snippet.split_once('=') {
            return Some((name.trim().to_string(), snippet_value(value)));
        }

        is_attribute_name(snippet).then(|| (snippet.to_string(), Value::Bool(true)))
    }

    fn prop_key(&self, name: &str) -> String {
        camelize_lower(name)
    }

    fn render(&self, tag: &str, props: &Props) -> String {
        let mut attrs = Vec::new();
        let mut content = None;

        for (key, value) in props {
            if key == "text" {
                content = Some(match value {
                    Value::String(s) => html_escape(s),
                    other => html_escape(&other.to_string()),
                });
                continue;
            }

            match value {
                Value::String(s) => attrs.push(format!(r#"{}="{}""#, key, html_escape(s))),
                Value::Bool(true) => attrs.push(key.clone()),
                other => attrs.push(format!(
                    r#":{}="{}""#,
                    key,
                    html_escape(&other.to_string())
                )),
            }
        }

        let attrs_str = if attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", attrs.join(" "))
        };

        match content {
            Some(content) => format!("<{tag}{attrs_str}>{content}</{tag}>"),
            None => format!("<{tag}{attrs_str} />"),
        }
    }
}

fn is_attribute_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Escape HTML special characters including single quotes.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
