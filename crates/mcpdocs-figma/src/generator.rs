//! Trait definitions for framework code generators.

use indexmap::IndexMap;
use serde_json::Value;

use mcpdocs_catalog::Framework;

use crate::rails::RailsGenerator;
use crate::vue::VueGenerator;

/// Generated props in insertion order.
pub type Props = IndexMap<String, Value>;

/// Framework-specific snippet parsing and code rendering.
pub trait CodeGenerator: Send + Sync {
    /// Framework this generator emits code for.
    fn framework(&self) -> Framework;

    /// Split a rule table snippet into a prop name and value.
    ///
    /// Returns `None` when the snippet is not an assignment in this
    /// framework's syntax.
    fn parse_snippet(&self, snippet: &str) -> Option<(String, Value)>;

    /// Key used for a prop set by the special-case overlay
    /// (`text`, `icon`, `icon_type`, `size`, `emphasized`).
    fn prop_key(&self, name: &str) -> String {
        name.to_string()
    }

    /// Render a component invocation.
    ///
    /// # Arguments
    /// * `target` - Class or tag name of the component
    /// * `props` - Props in the order they should appear
    fn render(&self, target: &str, props: &Props) -> String;
}

/// Generator for a framework.
pub fn generator_for(framework: Framework) -> &'static dyn CodeGenerator {
    static RAILS: RailsGenerator = RailsGenerator;
    static VUE: VueGenerator = VueGenerator;

    match framework {
        Framework::Rails => &RAILS,
        Framework::Vue => &VUE,
    }
}

/// Value half of a rule table snippet: trimmed, with every `"` removed.
///
/// Always a string; `emphasized: false` yields the string `"false"`.
pub(crate) fn snippet_value(raw: &str) -> Value {
    Value::String(raw.trim().replace('"', ""))
}
