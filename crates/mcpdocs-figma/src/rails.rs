//! Rails view component code generation.

use serde_json::Value;

use mcpdocs_catalog::Framework;

use crate::generator::{snippet_value, CodeGenerator, Props};

/// Emits `render Some::Component.new(key: value, ...)` calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct RailsGenerator;

impl CodeGenerator for RailsGenerator {
    fn framework(&self) -> Framework {
        Framework::Rails
    }

    /// `size: "large"` -> (`size`, `"large"`); `emphasized: true` -> (`emphasized`, `"true"`).
    fn parse_snippet(&self, snippet: &str) -> Option<(String, Value)> {
        let (name, value) = snippet.split_once(": ")?;
        Some((name.trim().to_string(), snippet_value(value)))
    }

    fn render(&self, class_name: &str, props: &Props) -> String {
        if props.is_empty() {
            return format!("render {}.new", class_name);
        }

        let args = props
            .iter()
            .map(|(k, v)| format!("{}: {}", k, format_value(v)))
            .collect::<Vec<_>>()
            .join(", ");

        format!("render {}.new({})", class_name, args)
    }
}

/// Format a prop value as a Ruby literal.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", escape_string(s)),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        other => format!("\"{}\"", escape_string(&other.to_string())),
    }
}

/// Escape a string for a double-quoted Ruby literal.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('#', "\\#")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(pairs: &[(&str, Value)]) -> Props {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn renders_bare_constructor_without_props() {
        let code = RailsGenerator.render("Vue::BadgeComponent", &Props::new());
        assert_eq!(code, "render Vue::BadgeComponent.new");
    }

    #[test]
    fn renders_props_in_insertion_order() {
        let code = RailsGenerator.render(
            "Vue::BadgeComponent",
            &props(&[
                ("text", json!("Badge")),
                ("size", json!("large")),
                ("emphasized", json!(true)),
                ("count", json!(3)),
            ]),
        );

        assert_eq!(
            code,
            r#"render Vue::BadgeComponent.new(text: "Badge", size: "large", emphasized: true, count: 3)"#
        );
    }

    #[test]
    fn quotes_other_values() {
        assert_eq!(format_value(&json!(null)), r#""null""#);
        assert_eq!(format_value(&json!(["a"])), r#""[\"a\"]""#);
        assert_eq!(format_value(&json!("say \"hi\"")), r#""say \"hi\"""#);
        assert_eq!(format_value(&json!("#{x}")), r#""\#{x}""#);
    }

    #[test]
    fn parses_rails_snippets() {
        assert_eq!(
            RailsGenerator.parse_snippet(r#"size: "large""#),
            Some(("size".to_string(), json!("large")))
        );
        assert_eq!(
            RailsGenerator.parse_snippet("emphasized: false"),
            Some(("emphasized".to_string(), json!("false")))
        );
        assert_eq!(
            RailsGenerator.parse_snippet(r#"text: "a: b""#),
            Some(("text".to_string(), json!("a: b")))
        );
        assert_eq!(RailsGenerator.parse_snippet("inner text content"), None);
        assert_eq!(RailsGenerator.parse_snippet("a:b"), None);
    }
}
