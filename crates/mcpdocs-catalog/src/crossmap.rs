//! Prop correspondence between rails and vue descriptors.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::model::{ComponentDescriptor, PropDescriptor, RuleTable, UsageExample};
use crate::name::{camelize_lower, underscore};
use crate::store::Catalog;

/// A matched rails/vue prop pair with notes on how they differ.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropCorrespondence<'a> {
    pub rails: &'a PropDescriptor,
    pub vue: &'a PropDescriptor,
    pub conversion_notes: Vec<String>,
}

/// Rails prop name -> matched vue prop.
pub type CrossMapping<'a> = IndexMap<String, PropCorrespondence<'a>>;

/// Decides whether a rails prop name and a vue prop name refer to the same prop.
type PropMatcher = fn(rails: &str, vue: &str) -> bool;

/// Tried in order; the first strategy that finds a vue prop wins.
const PROP_MATCHERS: [(&str, PropMatcher); 3] = [
    ("exact", exact_name),
    ("camel_case", camelized_rails_name),
    ("snake_case", underscored_vue_name),
];

fn exact_name(rails: &str, vue: &str) -> bool {
    rails == vue
}

fn camelized_rails_name(rails: &str, vue: &str) -> bool {
    camelize_lower(rails) == vue
}

fn underscored_vue_name(rails: &str, vue: &str) -> bool {
    underscore(vue) == rails
}

/// Find the vue prop that corresponds to a rails prop.
pub fn find_matching_prop<'a>(
    rails_prop: &PropDescriptor,
    vue_props: &'a [PropDescriptor],
) -> Option<&'a PropDescriptor> {
    PROP_MATCHERS.iter().find_map(|(strategy, matches)| {
        let found = vue_props.iter().find(|vp| matches(&rails_prop.name, &vp.name))?;
        tracing::debug!(
            "Matched rails prop {} to vue prop {} ({})",
            rails_prop.name,
            found.name,
            strategy
        );
        Some(found)
    })
}

/// One note per attribute that differs between the two props.
pub fn conversion_notes(rails: &PropDescriptor, vue: &PropDescriptor) -> Vec<String> {
    let mut notes = Vec::new();

    if rails.prop_type != vue.prop_type {
        notes.push(format!(
            "Type conversion: Rails {} → Vue {}",
            rails.prop_type, vue.prop_type
        ));
    }

    if rails.default != vue.default {
        notes.push(format!(
            "Default value: Rails {} → Vue {}",
            display_default(rails.default.as_ref()),
            display_default(vue.default.as_ref())
        ));
    }

    if rails.required != vue.required {
        notes.push(format!(
            "Required: Rails {} → Vue {}",
            rails.required, vue.required
        ));
    }

    notes
}

fn display_default(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "none".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Correspondence for every rails prop that has a vue counterpart.
///
/// Empty unless both descriptors are present.
pub fn compute_cross_mapping<'a>(
    rails: Option<&'a ComponentDescriptor>,
    vue: Option<&'a ComponentDescriptor>,
) -> CrossMapping<'a> {
    let (Some(rails), Some(vue)) = (rails, vue) else {
        return CrossMapping::new();
    };

    rails
        .props
        .iter()
        .filter_map(|rails_prop| {
            let vue_prop = find_matching_prop(rails_prop, &vue.props)?;
            Some((
                rails_prop.name.clone(),
                PropCorrespondence {
                    rails: rails_prop,
                    vue: vue_prop,
                    conversion_notes: conversion_notes(rails_prop, vue_prop),
                },
            ))
        })
        .collect()
}

/// Integration details for one framework in a component mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkMapping<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_name: Option<&'a str>,
    pub props: &'a [PropDescriptor],
    pub figma_mapping: Option<&'a RuleTable>,
    pub usage_examples: &'a [UsageExample],
}

impl<'a> From<&'a ComponentDescriptor> for FrameworkMapping<'a> {
    fn from(d: &'a ComponentDescriptor) -> Self {
        Self {
            class_name: d.class_name.as_deref(),
            component_name: d.component_name.as_deref(),
            props: &d.props,
            figma_mapping: d.figma_mapping.as_ref(),
            usage_examples: &d.usage_examples,
        }
    }
}

/// Everything needed to port a component between frameworks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentMapping<'a> {
    pub component_name: String,
    pub rails: Option<FrameworkMapping<'a>>,
    pub vue: Option<FrameworkMapping<'a>>,
    pub cross_framework_mapping: CrossMapping<'a>,
}

/// Figma rule tables of both frameworks for one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigmaMappingRules {
    pub figma_to_rails: RuleTable,
    pub figma_to_vue: RuleTable,
    pub component_name: String,
}

impl Catalog {
    /// Component mapping for a name, or `None` when neither framework
    /// documents it.
    pub fn mapping(&self, name: &str) -> Option<ComponentMapping<'_>> {
        let merged = self.get(name);
        if merged.is_empty() {
            return None;
        }

        Some(ComponentMapping {
            rails: merged.rails.map(FrameworkMapping::from),
            vue: merged.vue.map(FrameworkMapping::from),
            cross_framework_mapping: compute_cross_mapping(merged.rails, merged.vue),
            component_name: merged.name,
        })
    }

    /// Figma rule tables for a name; a side without rules yields an empty table.
    pub fn figma_mapping_rules(&self, name: &str) -> Option<FigmaMappingRules> {
        let merged = self.get(name);
        if merged.is_empty() {
            return None;
        }

        let rules_of = |d: Option<&ComponentDescriptor>| {
            d.and_then(|d| d.figma_mapping.clone()).unwrap_or_default()
        };

        Some(FigmaMappingRules {
            figma_to_rails: rules_of(merged.rails),
            figma_to_vue: rules_of(merged.vue),
            component_name: name.to_string(),
        })
    }
}
