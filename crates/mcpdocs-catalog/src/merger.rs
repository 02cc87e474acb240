//! Joins rails and vue documentation by canonical name.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{ComponentDescriptor, ComponentListing, Framework};
use crate::name::{humanize, normalize};
use crate::store::Catalog;

/// One row of the merged component index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedComponentSummary {
    pub name: String,
    pub frameworks: Vec<Framework>,
    pub rails_available: bool,
    pub vue_available: bool,
    pub display_name: String,
}

/// Both frameworks' documentation for one canonical name.
///
/// Either side, or both, may be absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedComponent<'a> {
    pub name: String,
    pub rails: Option<&'a ComponentDescriptor>,
    pub vue: Option<&'a ComponentDescriptor>,
}

impl<'a> MergedComponent<'a> {
    /// True when neither framework documents the component.
    pub fn is_empty(&self) -> bool {
        self.rails.is_none() && self.vue.is_none()
    }

    /// Descriptor for one framework.
    pub fn side(&self, framework: Framework) -> Option<&'a ComponentDescriptor> {
        match framework {
            Framework::Rails => self.rails,
            Framework::Vue => self.vue,
        }
    }
}

impl Catalog {
    /// Union of both frameworks' listings, grouped by canonical name and
    /// sorted by it.
    pub fn list_all(&self) -> Vec<MergedComponentSummary> {
        let mut groups: BTreeMap<String, Vec<&ComponentListing>> = BTreeMap::new();

        for framework in Framework::ALL {
            for listing in self.listing(framework) {
                groups
                    .entry(normalize(&listing.name))
                    .or_default()
                    .push(listing);
            }
        }

        groups
            .into_iter()
            .map(|(name, items)| {
                let mut frameworks = Vec::with_capacity(2);
                for item in &items {
                    if !frameworks.contains(&item.framework) {
                        frameworks.push(item.framework);
                    }
                }

                let display_name = items
                    .iter()
                    .map(|i| i.display_name.as_str())
                    .find(|d| !d.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| humanize(&name));

                MergedComponentSummary {
                    rails_available: frameworks.contains(&Framework::Rails),
                    vue_available: frameworks.contains(&Framework::Vue),
                    frameworks,
                    display_name,
                    name,
                }
            })
            .collect()
    }

    /// Canonical names of every listed component, sorted.
    pub fn component_names(&self) -> Vec<String> {
        self.list_all().into_iter().map(|c| c.name).collect()
    }

    /// Both frameworks' documentation for a (possibly non-canonical) name.
    pub fn get(&self, name: &str) -> MergedComponent<'_> {
        let name = normalize(name);
        MergedComponent {
            rails: self.component(Framework::Rails, &name),
            vue: self.component(Framework::Vue, &name),
            name,
        }
    }

    /// True when either framework lists the component.
    pub fn component_exists(&self, name: &str) -> bool {
        let name = normalize(name);
        Framework::ALL
            .iter()
            .any(|f| self.listing(*f).iter().any(|l| l.name == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PreviewHost;
    use pretty_assertions::assert_eq;

    fn vue_listing(display_name: &str) -> ComponentListing {
        ComponentListing {
            name: normalize(display_name),
            display_name: display_name.to_string(),
            framework: Framework::Vue,
            path: String::new(),
            preview: PreviewHost::Storybook,
        }
    }

    #[test]
    fn lists_union_sorted_by_name() {
        let catalog = Catalog::builtin().unwrap();
        let all = catalog.list_all();

        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["badge", "button", "tab_bar_primary"]);

        let badge = &all[0];
        assert_eq!(badge.frameworks, [Framework::Rails, Framework::Vue]);
        assert!(badge.rails_available && badge.vue_available);
        assert_eq!(badge.display_name, "Badge");

        let tabs = &all[2];
        assert_eq!(tabs.frameworks, [Framework::Rails]);
        assert!(!tabs.vue_available);
        assert_eq!(tabs.display_name, "Tab Bar Primary");
    }

    #[test]
    fn list_has_no_duplicates_when_listing_repeats() {
        let catalog = Catalog::builtin().unwrap().with_vue_listing(vec![
            vue_listing("Badge"),
            vue_listing("badge"),
            vue_listing("Chip"),
        ]);

        let all = catalog.list_all();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["badge", "button", "chip", "tab_bar_primary"]);
        assert_eq!(all[0].frameworks, [Framework::Rails, Framework::Vue]);
    }

    #[test]
    fn humanizes_missing_display_name() {
        let mut entry = vue_listing("Status Dot");
        entry.display_name = String::new();
        let catalog = Catalog::builtin().unwrap().with_vue_listing(vec![entry]);

        let dot = catalog
            .list_all()
            .into_iter()
            .find(|c| c.name == "status_dot")
            .unwrap();
        assert_eq!(dot.display_name, "Status dot");
    }

    #[test]
    fn get_normalizes_input() {
        let catalog = Catalog::builtin().unwrap();

        let a = catalog.get("Badge");
        let b = catalog.get("badge");
        let c = catalog.get("BADGE!!");

        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.name, "badge");
        assert!(a.rails.is_some() && a.vue.is_some());
    }

    #[test]
    fn get_reports_partial_and_missing_sides() {
        let catalog = Catalog::builtin().unwrap();

        let tabs = catalog.get("TabBarPrimary");
        assert!(tabs.rails.is_some());
        assert!(tabs.vue.is_none());
        assert!(!tabs.is_empty());

        let missing = catalog.get("carousel");
        assert!(missing.is_empty());
        assert!(!catalog.component_names().is_empty());
    }

    #[test]
    fn listed_component_may_lack_docs() {
        let catalog = Catalog::builtin().unwrap();

        assert!(catalog.component_exists("Button"));
        assert!(catalog.get("button").is_empty());
        assert!(!catalog.component_exists("carousel"));
    }
}
