//! Canonical component names.
//!
//! Every table in the catalog is keyed by a canonical name: lowercase,
//! underscore separated and restricted to `[a-z0-9_]`. Display names such as
//! `"Tab Bar Primary"`, `"TabBarPrimary"` or `"tab-bar-primary"` all collapse
//! to `tab_bar_primary`.

use convert_case::{Case, Casing};
use regex::Regex;
use std::sync::LazyLock;

/// Convert an arbitrary display name to its canonical lookup key.
///
/// Total and idempotent: the output only ever contains `[a-z0-9_]`, so
/// normalizing it again returns it unchanged.
pub fn normalize(name: &str) -> String {
    underscore(name)
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Snake-case a word: split acronym and case boundaries with `_`, turn
/// hyphens and whitespace into `_`, and lowercase the result.
///
/// Unlike [`normalize`] this keeps any other punctuation.
pub fn underscore(word: &str) -> String {
    static ACRONYM_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("Invalid acronym boundary regex")
    });
    static CASE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"([a-z\d])([A-Z])").expect("Invalid case boundary regex")
    });

    let word = word.replace("::", "/");
    let word = ACRONYM_RE.replace_all(&word, "${1}_${2}");
    let word = CASE_RE.replace_all(&word, "${1}_${2}");

    word.chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Convert a snake_case name to lowerCamelCase (`icon_type` -> `iconType`).
///
/// Only `_` separates words: `size_2x` -> `size2x`.
pub fn camelize_lower(name: &str) -> String {
    name.from_case(Case::Snake).to_case(Case::Camel)
}

/// Human readable form of a canonical name (`tab_bar_primary` -> `Tab bar primary`).
pub fn humanize(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let spaced = spaced.trim();

    let mut chars = spaced.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_canonical(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }

    #[test]
    fn normalizes_display_names() {
        assert_eq!(normalize("Badge"), "badge");
        assert_eq!(normalize("BADGE!!"), "badge");
        assert_eq!(normalize("TabBarPrimary"), "tab_bar_primary");
        assert_eq!(normalize("Tab Bar Primary"), "tab_bar_primary");
        assert_eq!(normalize("tab-bar-primary"), "tab_bar_primary");
        assert_eq!(normalize("HTMLButton"), "html_button");
        assert_eq!(normalize("UI::Button"), "uibutton");
    }

    #[test]
    fn normalize_is_total() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("Über Größe"), "ber_gre");
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "",
            "badge",
            "Badge",
            "BADGE!!",
            "Tab Bar Primary",
            "iconType",
            "XMLHttpRequest2",
            "  spaced   out  ",
            "snake_already",
            "Vue::BadgeComponent",
            "émoji 🎉 name",
        ];

        for input in inputs {
            let once = normalize(input);
            assert!(is_canonical(&once), "{input:?} -> {once:?}");
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn underscores_camel_case() {
        assert_eq!(underscore("iconType"), "icon_type");
        assert_eq!(underscore("wrapText"), "wrap_text");
        assert_eq!(underscore("Size"), "size");
        assert_eq!(underscore("Icon Name"), "icon_name");
    }

    #[test]
    fn camelizes_snake_case() {
        assert_eq!(camelize_lower("icon_type"), "iconType");
        assert_eq!(camelize_lower("size"), "size");
        assert_eq!(camelize_lower("wrap_text"), "wrapText");
    }

    #[test]
    fn camelize_splits_only_on_underscores() {
        assert_eq!(camelize_lower("size_2x"), "size2x");
        assert_eq!(camelize_lower("icon_type_2"), "iconType2");
        assert_eq!(camelize_lower("h2o_level"), "h2oLevel");
        assert_eq!(camelize_lower("a_b_c"), "aBC");
        assert_eq!(camelize_lower("aria_url"), "ariaUrl");
    }

    #[test]
    fn humanizes_canonical_names() {
        assert_eq!(humanize("tab_bar_primary"), "Tab bar primary");
        assert_eq!(humanize("badge"), "Badge");
        assert_eq!(humanize(""), "");
    }
}
