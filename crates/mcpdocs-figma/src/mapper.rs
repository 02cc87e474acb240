//! Figma property mapping.
//!
//! A Figma payload names a component and carries its variant properties.
//! Each property is looked up in the component's rule table, and a few
//! well-known fields (`text`, `icon`, `size`, `emphasis`) are applied on top.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use mcpdocs_catalog::{normalize, underscore, Catalog, RuleTable};

use crate::generator::{CodeGenerator, Props};
use crate::outcome::{MappingOutcome, MappingSuccess};

/// Figma size variants understood by the overlay.
const SIZE_VARIANTS: [(&str, &str); 3] = [
    ("L 24px", "large"),
    ("M 16px", "medium"),
    ("S 12px", "small"),
];

/// Figma emphasis values understood by the overlay.
const EMPHASIS_VALUES: [(&str, bool); 2] = [("High", true), ("Low", false)];

/// Icon instance attached to a Figma node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FigmaIcon {
    #[serde(default)]
    pub name: Option<Value>,

    #[serde(default, rename = "type")]
    pub icon_type: Option<Value>,
}

/// The Figma payload accepted by the mapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaData {
    #[serde(default)]
    pub component_name: Option<String>,

    /// Variant properties, in the order Figma lists them
    #[serde(default)]
    pub properties: Option<IndexMap<String, Value>>,

    #[serde(default)]
    pub icon: Option<FigmaIcon>,

    /// Any JSON value; non-strings are emitted in their JSON form
    #[serde(default)]
    pub text: Option<Value>,

    /// Only the strings in [`SIZE_VARIANTS`] are recognized
    #[serde(default)]
    pub size: Option<Value>,

    #[serde(default)]
    pub emphasis: Option<Value>,
}

/// Errors raised while mapping a payload.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("componentName must be a string, got {0}")]
    InvalidComponentName(Value),

    #[error("figma data must be an object")]
    NotAnObject,

    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}

/// Rule table key for a property value: strings as-is, anything else as JSON.
fn value_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Translate Figma properties through a rule table.
///
/// Unknown properties and values without a rule (or with a `null` rule)
/// produce nothing. A snippet that is not an assignment in the generator's
/// syntax is stored under the snake-cased property name.
pub fn map_properties(
    properties: &IndexMap<String, Value>,
    rules: &RuleTable,
    generator: &dyn CodeGenerator,
) -> Props {
    let mut props = Props::new();

    for (property, value) in properties {
        let Some(table) = rules.get(property) else {
            continue;
        };
        let Some(Some(snippet)) = table.get(&value_key(value)) else {
            continue;
        };

        match generator.parse_snippet(snippet) {
            Some((name, mapped)) => {
                props.insert(name, mapped);
            }
            None => {
                props.insert(underscore(property), Value::String(snippet.clone()));
            }
        }
    }

    props
}

/// Apply the `text`, `icon`, `size` and `emphasis` fields, overwriting any
/// prop the rule table produced.
pub fn apply_special_properties(
    figma: &FigmaData,
    props: &mut Props,
    generator: &dyn CodeGenerator,
) {
    if let Some(text) = &figma.text {
        props.insert(generator.prop_key("text"), Value::String(display_value(text)));
    }

    if let Some(FigmaIcon {
        name: Some(name),
        icon_type,
    }) = &figma.icon
    {
        let icon_type = icon_type
            .as_ref()
            .map(display_value)
            .unwrap_or_else(|| "solid".to_string());
        props.insert(generator.prop_key("icon"), Value::String(display_value(name)));
        props.insert(generator.prop_key("icon_type"), Value::String(icon_type));
    }

    if let Some(size) = figma.size.as_ref().and_then(Value::as_str) {
        if let Some((_, variant)) = SIZE_VARIANTS.iter().find(|(k, _)| *k == size) {
            props.insert(generator.prop_key("size"), Value::String(variant.to_string()));
        }
    }

    // A "Low" emphasis looks up `false`, and a false lookup never writes the prop.
    if let Some(emphasis) = figma.emphasis.as_ref().and_then(Value::as_str) {
        let emphasized = EMPHASIS_VALUES
            .iter()
            .find(|(k, _)| *k == emphasis)
            .map(|(_, v)| *v);
        if emphasized == Some(true) {
            props.insert(generator.prop_key("emphasized"), Value::Bool(true));
        }
    }
}

/// One line per Figma property that ended up as a prop of the same name.
pub fn mapping_explanation(figma: &FigmaData, props: &Props) -> String {
    let Some(properties) = &figma.properties else {
        return String::new();
    };

    properties
        .iter()
        .filter_map(|(property, value)| {
            let key = underscore(property);
            let mapped = props.get(&key)?;
            Some(format!(
                "Figma's \"{}: {}\" maps to {}: {}",
                property,
                display_value(value),
                key,
                display_value(mapped)
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Canonical component name of a raw payload; `unknown` when it names none.
pub fn extract_component_name(figma_data: &Value) -> Result<String, MappingError> {
    let object = figma_data.as_object().ok_or(MappingError::NotAnObject)?;

    match object.get("componentName") {
        None | Some(Value::Null) => Ok("unknown".to_string()),
        Some(Value::String(name)) => Ok(normalize(name)),
        Some(other) => Err(MappingError::InvalidComponentName(other.clone())),
    }
}

/// Maps Figma payloads to component code using the catalog's rule tables.
#[derive(Debug, Clone, Copy)]
pub struct FigmaMapper<'a> {
    catalog: &'a Catalog,
}

impl<'a> FigmaMapper<'a> {
    /// Create a mapper over a catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Map a raw Figma payload for the generator's framework.
    ///
    /// Never fails: malformed payloads become [`MappingOutcome::Failed`].
    pub fn map(&self, figma_data: &Value, generator: &dyn CodeGenerator) -> MappingOutcome {
        let component_name = match extract_component_name(figma_data) {
            Ok(name) => name,
            Err(e) => return failed(e, None),
        };

        let framework = generator.framework();
        let Some(descriptor) = self.catalog.component(framework, &component_name) else {
            tracing::debug!("No {} component named {:?}", framework, component_name);
            return MappingOutcome::ComponentNotFound {
                framework,
                component_name,
                available_components: self.catalog.component_names(),
            };
        };

        let figma = match FigmaData::deserialize(figma_data) {
            Ok(figma) => figma,
            Err(e) => return failed(e.into(), Some(component_name)),
        };

        let empty_rules = RuleTable::new();
        let rules = descriptor.figma_mapping.as_ref().unwrap_or(&empty_rules);

        let mut props = match &figma.properties {
            Some(properties) => map_properties(properties, rules, generator),
            None => Props::new(),
        };
        apply_special_properties(&figma, &mut props, generator);

        let code = generator.render(descriptor.target_name(), &props);
        let mapping_explanation = mapping_explanation(&figma, &props);

        tracing::debug!("Mapped {} to {} props", component_name, props.len());

        MappingOutcome::Mapped(MappingSuccess {
            framework,
            component_name,
            figma_data: figma_data.clone(),
            props,
            code,
            mapping_explanation,
        })
    }
}

fn failed(error: MappingError, component_name: Option<String>) -> MappingOutcome {
    tracing::warn!("Figma mapping failed: {}", error);
    MappingOutcome::Failed {
        error: format!("Mapping failed: {}", error),
        component_name,
    }
}
