//! Results of a Figma mapping request.

use serde_json::{json, Map, Value};

use mcpdocs_catalog::Framework;

use crate::generator::Props;

/// A successful mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingSuccess {
    pub framework: Framework,
    pub component_name: String,
    /// The payload as received
    pub figma_data: Value,
    pub props: Props,
    pub code: String,
    pub mapping_explanation: String,
}

/// Outcome of mapping one Figma payload.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingOutcome {
    /// Props and code were generated.
    Mapped(MappingSuccess),

    /// The payload names a component the target framework does not document.
    ComponentNotFound {
        framework: Framework,
        component_name: String,
        available_components: Vec<String>,
    },

    /// The payload could not be mapped.
    Failed {
        error: String,
        component_name: Option<String>,
    },
}

impl MappingOutcome {
    /// Whether props and code were generated.
    pub fn is_success(&self) -> bool {
        matches!(self, MappingOutcome::Mapped(_))
    }

    /// JSON body of the outcome.
    ///
    /// Framework-specific keys are prefixed with the framework name, e.g.
    /// `rails_props` and `rails_code`.
    pub fn to_json(&self) -> Value {
        match self {
            MappingOutcome::Mapped(success) => {
                let prefix = success.framework.as_str();
                let mut body = Map::new();
                body.insert("success".into(), Value::Bool(true));
                body.insert(
                    "component_name".into(),
                    Value::String(success.component_name.clone()),
                );
                body.insert("figma_data".into(), success.figma_data.clone());
                body.insert(
                    format!("{}_props", prefix),
                    Value::Object(success.props.clone().into_iter().collect()),
                );
                body.insert(format!("{}_code", prefix), Value::String(success.code.clone()));
                body.insert(
                    "mapping_explanation".into(),
                    Value::String(success.mapping_explanation.clone()),
                );
                Value::Object(body)
            }
            MappingOutcome::ComponentNotFound {
                framework,
                component_name,
                available_components,
            } => json!({
                "success": false,
                "error": format!("{} component not found", framework.title()),
                "component_name": component_name,
                "available_components": available_components,
            }),
            MappingOutcome::Failed {
                error,
                component_name,
            } => json!({
                "success": false,
                "error": error,
                "component_name": component_name,
            }),
        }
    }
}
