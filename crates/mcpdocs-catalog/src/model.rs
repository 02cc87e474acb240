//! Descriptor types for components, props, tokens and assets.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One of the two documented component ecosystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    /// Server-rendered view components
    Rails,
    /// Client-side component library
    Vue,
}

impl Framework {
    /// Both frameworks, in listing order.
    pub const ALL: [Framework; 2] = [Framework::Rails, Framework::Vue];

    /// Lowercase identifier used in JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Rails => "rails",
            Framework::Vue => "vue",
        }
    }

    /// Capitalized name used in human readable messages.
    pub fn title(&self) -> &'static str {
        match self {
            Framework::Rails => "Rails",
            Framework::Vue => "Vue",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a component prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropType {
    String,
    Boolean,
    Number,
    Array,
}

impl fmt::Display for PropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropType::String => "String",
            PropType::Boolean => "Boolean",
            PropType::Number => "Number",
            PropType::Array => "Array",
        };
        f.write_str(name)
    }
}

/// A single prop accepted by a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropDescriptor {
    pub name: String,

    #[serde(rename = "type")]
    pub prop_type: PropType,

    #[serde(default)]
    pub required: bool,

    /// Default value, absent when the prop has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Allowed values for enumerated string props
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    pub description: String,
}

/// A documented usage snippet for one framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageExample {
    pub title: String,
    pub description: String,
    pub code: String,
}

/// A usage snippet shown side by side for both frameworks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossUsageExample {
    pub title: String,
    pub description: String,
    pub rails_code: String,
    pub vue_code: String,
}

/// Figma rule table: property name -> property value -> generated snippet.
///
/// A `None` snippet means the value produces no prop.
pub type RuleTable = IndexMap<String, IndexMap<String, Option<String>>>;

/// Full documentation for one component in one framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    /// Canonical name
    pub name: String,

    pub framework: Framework,

    pub display_name: String,

    /// Ruby class rendered by the rails framework (e.g. `Vue::BadgeComponent`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    /// Registered component tag for the vue framework (e.g. `PfBadge`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,

    pub description: String,

    #[serde(default)]
    pub props: Vec<PropDescriptor>,

    #[serde(default)]
    pub usage_examples: Vec<UsageExample>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub figma_mapping: Option<RuleTable>,
}

impl ComponentDescriptor {
    /// Name used when generating code for this component.
    pub fn target_name(&self) -> &str {
        self.class_name
            .as_deref()
            .or(self.component_name.as_deref())
            .unwrap_or(&self.name)
    }

    /// Look up a prop by exact name.
    pub fn prop(&self, name: &str) -> Option<&PropDescriptor> {
        self.props.iter().find(|p| p.name == name)
    }
}

/// Where a listed component can be previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewHost {
    Lookbook,
    Storybook,
}

/// An entry in a framework's component listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentListing {
    pub name: String,
    pub display_name: String,
    pub framework: Framework,
    /// Source file of the component inside its project
    pub path: String,
    pub preview: PreviewHost,
}

/// Design token as shown in the token index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSummary {
    pub name: String,
    pub display_name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub usage_in_components: Vec<String>,
}

/// Detailed documentation for a design token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDocs {
    pub name: String,
    pub display_name: String,
    pub category: String,
    pub description: String,
    pub value: String,
    pub usage_examples: Vec<CrossUsageExample>,
    /// Figma value -> token name
    pub figma_mapping: IndexMap<String, String>,
}

/// Icon or illustration as shown in the asset index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSummary {
    pub name: String,
    pub display_name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub available_styles: Vec<String>,
    pub available_sizes: Vec<String>,
    pub usage_in_components: Vec<String>,
}

/// A Figma hint for an asset: either a fixed value or a value table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FigmaHint {
    Value(String),
    Table(IndexMap<String, String>),
}

/// Detailed documentation for an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDocs {
    pub name: String,
    pub display_name: String,
    pub category: String,
    pub description: String,
    pub usage_examples: Vec<CrossUsageExample>,
    pub figma_mapping: IndexMap<String, FigmaHint>,
}
