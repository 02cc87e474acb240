//! Read-only documentation store.
//!
//! The catalog is parsed once from the embedded YAML document and then shared
//! immutably. Lookups normalize their input and return `None` for unknown names.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::listing::load_listing_file;
use crate::model::{
    AssetDocs, AssetSummary, ComponentDescriptor, ComponentListing, Framework, PreviewHost,
    TokenDocs, TokenSummary,
};
use crate::name::normalize;

/// The built-in documentation document.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.yaml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    components: ComponentSection,
    listings: ListingSection,
    tokens: TokenSection,
    assets: AssetSection,
}

#[derive(Debug, Deserialize)]
struct ComponentSection {
    #[serde(default)]
    rails: Vec<ComponentDescriptor>,
    #[serde(default)]
    vue: Vec<ComponentDescriptor>,
}

#[derive(Debug, Deserialize)]
struct ListingSection {
    #[serde(default)]
    rails: Vec<ComponentListing>,
    #[serde(default)]
    vue_fallback: Vec<ComponentListing>,
}

#[derive(Debug, Deserialize)]
struct TokenSection {
    summaries: Vec<TokenSummary>,
    docs: Vec<TokenDocs>,
}

#[derive(Debug, Deserialize)]
struct AssetSection {
    summaries: Vec<AssetSummary>,
    docs: Vec<AssetDocs>,
}

/// Options controlling how the catalog is assembled at startup.
#[derive(Debug, Clone, Default)]
pub struct CatalogOptions<'a> {
    /// JSON listing of vue components; the built-in fallback is used when
    /// this is unset, missing or unparsable.
    pub vue_listing: Option<&'a Path>,
}

/// All documentation known to the server.
#[derive(Debug, Clone)]
pub struct Catalog {
    rails: IndexMap<String, ComponentDescriptor>,
    vue: IndexMap<String, ComponentDescriptor>,
    rails_listing: Vec<ComponentListing>,
    vue_listing: Vec<ComponentListing>,
    token_summaries: Vec<TokenSummary>,
    token_docs: IndexMap<String, TokenDocs>,
    asset_summaries: Vec<AssetSummary>,
    asset_docs: IndexMap<String, AssetDocs>,
}

impl Catalog {
    /// Parse the built-in catalog with the fallback vue listing.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse the built-in catalog and apply startup options.
    ///
    /// A vue listing file that cannot be read or parsed is logged and
    /// replaced by the built-in fallback; it never fails the load.
    pub fn load(options: &CatalogOptions<'_>) -> Result<Self, CatalogError> {
        let catalog = Self::builtin()?;

        let Some(path) = options.vue_listing else {
            return Ok(catalog);
        };

        if !path.exists() {
            tracing::info!(
                "No vue component listing at {}, using built-in list",
                path.display()
            );
            return Ok(catalog);
        }

        match load_listing_file(path, Framework::Vue, PreviewHost::Storybook) {
            Ok(listing) => {
                tracing::info!(
                    "Loaded {} vue components from {}",
                    listing.len(),
                    path.display()
                );
                Ok(catalog.with_vue_listing(listing))
            }
            Err(e) => {
                tracing::warn!("{}; using built-in list", e);
                Ok(catalog)
            }
        }
    }

    /// Parse a catalog document.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_yaml::from_str(source).map_err(|e| CatalogError::InvalidData(e.to_string()))?;

        let rails = index_components(file.components.rails, Framework::Rails)?;
        let vue = index_components(file.components.vue, Framework::Vue)?;
        let token_docs = index_by_name(file.tokens.docs, "token", |t| &t.name)?;
        let asset_docs = index_by_name(file.assets.docs, "asset", |a| &a.name)?;

        for listing in file.listings.rails.iter().chain(&file.listings.vue_fallback) {
            check_canonical(&listing.name)?;
        }

        Ok(Self {
            rails,
            vue,
            rails_listing: file.listings.rails,
            vue_listing: file.listings.vue_fallback,
            token_summaries: file.tokens.summaries,
            token_docs,
            asset_summaries: file.assets.summaries,
            asset_docs,
        })
    }

    /// Replace the vue component listing.
    pub fn with_vue_listing(mut self, listing: Vec<ComponentListing>) -> Self {
        self.vue_listing = listing;
        self
    }

    /// Look up a component descriptor for one framework.
    pub fn component(&self, framework: Framework, name: &str) -> Option<&ComponentDescriptor> {
        let key = normalize(name);
        match framework {
            Framework::Rails => self.rails.get(&key),
            Framework::Vue => self.vue.get(&key),
        }
    }

    /// Listed components of one framework.
    pub fn listing(&self, framework: Framework) -> &[ComponentListing] {
        match framework {
            Framework::Rails => &self.rails_listing,
            Framework::Vue => &self.vue_listing,
        }
    }

    /// All design tokens, in catalog order.
    pub fn tokens(&self) -> &[TokenSummary] {
        &self.token_summaries
    }

    /// Detailed documentation for a token.
    pub fn token(&self, name: &str) -> Option<&TokenDocs> {
        self.token_docs.get(&normalize(name))
    }

    /// All assets, in catalog order.
    pub fn assets(&self) -> &[AssetSummary] {
        &self.asset_summaries
    }

    /// Detailed documentation for an asset.
    pub fn asset(&self, name: &str) -> Option<&AssetDocs> {
        self.asset_docs.get(&normalize(name))
    }
}

fn check_canonical(name: &str) -> Result<(), CatalogError> {
    let canonical = normalize(name);
    if canonical != name || canonical.is_empty() {
        return Err(CatalogError::NonCanonicalName(name.to_string(), canonical));
    }
    Ok(())
}

fn index_components(
    descriptors: Vec<ComponentDescriptor>,
    framework: Framework,
) -> Result<IndexMap<String, ComponentDescriptor>, CatalogError> {
    if let Some(d) = descriptors.iter().find(|d| d.framework != framework) {
        return Err(CatalogError::InvalidData(format!(
            "{} listed under {} components",
            d.name, framework
        )));
    }
    index_by_name(descriptors, "component", |d| &d.name)
}

fn index_by_name<T>(
    items: Vec<T>,
    kind: &'static str,
    name_of: impl Fn(&T) -> &String,
) -> Result<IndexMap<String, T>, CatalogError> {
    let mut index = IndexMap::with_capacity(items.len());
    for item in items {
        let name = name_of(&item).clone();
        check_canonical(&name)?;
        if index.insert(name.clone(), item).is_some() {
            return Err(CatalogError::Duplicate { kind, name });
        }
    }
    Ok(index)
}
