use std::collections::HashSet;
use std::sync::OnceLock;

/// Categories from `UIBUDDY_DIAGNOSTICS`, read once per process.
pub fn diagnostics_enabled(category: &str) -> bool {
    static SET: OnceLock<HashSet<String>> = OnceLock::new();
    let set = SET.get_or_init(|| {
        let raw = std::env::var("UIBUDDY_DIAGNOSTICS").unwrap_or_default();
        parse_categories(&raw)
    });
    contains(set, category)
}

/// Diagnostics selection of one builder. A configured list replaces the environment.
#[derive(Debug, Clone, Default)]
pub(crate) struct Diagnostics {
    configured: Option<HashSet<String>>,
}

impl Diagnostics {
    pub(crate) fn from_config(raw: Option<&str>) -> Self {
        Self {
            configured: raw.map(parse_categories),
        }
    }

    pub(crate) fn enabled(&self, category: &str) -> bool {
        match &self.configured {
            Some(set) => contains(set, category),
            None => diagnostics_enabled(category),
        }
    }
}

fn parse_categories(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn contains(set: &HashSet<String>, category: &str) -> bool {
    set.contains("all") || set.contains(&category.to_ascii_lowercase())
}
