//! Static component documentation for the mcpdocs API.
//!
//! This crate holds the rails and vue component descriptors, design tokens and
//! icon assets, and joins the two frameworks' documentation by canonical name.

pub mod crossmap;
pub mod error;
pub mod listing;
pub mod merger;
pub mod model;
pub mod name;
pub mod store;

pub use crossmap::{
    compute_cross_mapping, conversion_notes, find_matching_prop, ComponentMapping, CrossMapping,
    FigmaMappingRules, FrameworkMapping, PropCorrespondence,
};
pub use error::CatalogError;
pub use listing::{load_listing_file, parse_listing};
pub use merger::{MergedComponent, MergedComponentSummary};
pub use model::{
    AssetDocs, AssetSummary, ComponentDescriptor, ComponentListing, CrossUsageExample, FigmaHint,
    Framework, PreviewHost, PropDescriptor, PropType, RuleTable, TokenDocs, TokenSummary,
    UsageExample,
};
pub use name::{camelize_lower, humanize, normalize, underscore};
pub use store::{Catalog, CatalogOptions};
