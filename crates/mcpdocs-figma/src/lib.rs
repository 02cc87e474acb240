//! Figma property mapping and component code generation.
//!
//! Translates the variant properties of a Figma component instance into
//! props for a documented component, then renders them as a rails
//! `render ...new(...)` call or a vue template tag.

pub mod generator;
pub mod mapper;
pub mod outcome;
pub mod rails;
pub mod vue;

pub use generator::{generator_for, CodeGenerator, Props};
pub use mapper::{
    apply_special_properties, extract_component_name, map_properties, mapping_explanation,
    FigmaData, FigmaIcon, FigmaMapper, MappingError,
};
pub use outcome::{MappingOutcome, MappingSuccess};
pub use rails::RailsGenerator;
pub use vue::VueGenerator;
