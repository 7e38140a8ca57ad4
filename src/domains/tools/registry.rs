//! Tool registry - the data-driven endpoint table.
//!
//! Every upstream endpoint the server exposes is one [`ToolSpec`] row:
//! name, description, method, path, parameter table, location handling and
//! optional projection fields. A single generic handler (`dispatch.rs`)
//! consumes the rows, so adding an endpoint means adding a row to the
//! catalog, not writing a new type.

use std::sync::Arc;

use tracing::warn;

use crate::core::client::HttpMethod;
use crate::core::config::ModulesConfig;

use super::catalog::{self, Module};
use super::schema::ParamSpec;

/// How a tool's `location_name` parameter is resolved before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationMode {
    /// No location handling.
    None,
    /// Resolve free-text input to a city-level hierarchical name.
    City,
    /// Resolve and keep only the country component (Labs endpoints accept
    /// country-level names only).
    Country,
}

/// One row of the endpoint table.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub module: Module,
    pub method: HttpMethod,
    /// Endpoint path; `{param}` segments are substituted from arguments and
    /// excluded from the request body.
    pub path: &'static str,
    pub params: Vec<ParamSpec>,
    pub location: LocationMode,
    /// Dotted field paths kept in projected mode. `None` means the tool
    /// only supports full responses.
    pub fields: Option<Vec<&'static str>>,
}

/// Registry of the tools enabled for this server instance.
pub struct ToolRegistry {
    specs: Vec<Arc<ToolSpec>>,
}

impl ToolRegistry {
    /// Build the registry, filtered by the enabled-modules allow-list.
    /// An empty or absent list enables everything.
    pub fn new(modules: &ModulesConfig) -> Self {
        let enabled = Self::enabled_modules(modules);
        let specs = catalog::full_catalog()
            .into_iter()
            .filter(|spec| enabled.contains(&spec.module))
            .map(Arc::new)
            .collect();
        Self { specs }
    }

    fn enabled_modules(modules: &ModulesConfig) -> Vec<Module> {
        let Some(names) = &modules.enabled else {
            return Module::ALL.to_vec();
        };
        if names.is_empty() {
            return Module::ALL.to_vec();
        }

        let mut enabled = Vec::new();
        for name in names {
            match Module::parse(name) {
                Some(module) => enabled.push(module),
                None => warn!(module = %name, "unknown module in ENABLED_MODULES; skipping"),
            }
        }
        enabled
    }

    /// All enabled tool specs.
    pub fn specs(&self) -> &[Arc<ToolSpec>] {
        &self.specs
    }

    /// Names of all enabled tools.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.specs.iter().map(|spec| spec.name).collect()
    }

    /// Look up a tool spec by name.
    pub fn get(&self, name: &str) -> Option<&Arc<ToolSpec>> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules(enabled: Option<Vec<&str>>) -> ModulesConfig {
        ModulesConfig {
            enabled: enabled.map(|names| names.into_iter().map(String::from).collect()),
        }
    }

    #[test]
    fn test_all_modules_enabled_by_default() {
        let registry = ToolRegistry::new(&modules(None));
        let names = registry.tool_names();
        assert!(names.contains(&"serp_organic_live_advanced"));
        assert!(names.contains(&"dataforseo_labs_google_ranked_keywords"));
        assert!(names.contains(&"keywords_data_google_ads_keywords_for_site"));
        assert!(names.contains(&"onpage_summary"));
    }

    #[test]
    fn test_empty_list_means_all() {
        let all = ToolRegistry::new(&modules(None));
        let empty = ToolRegistry::new(&modules(Some(vec![])));
        assert_eq!(all.len(), empty.len());
    }

    #[test]
    fn test_module_filtering() {
        let registry = ToolRegistry::new(&modules(Some(vec!["serp"])));
        assert!(!registry.is_empty());
        assert!(registry.specs().iter().all(|s| s.module == Module::Serp));
        assert!(registry.get("dataforseo_labs_google_ranked_keywords").is_none());
    }

    #[test]
    fn test_unknown_module_skipped() {
        let registry = ToolRegistry::new(&modules(Some(vec!["serp", "bogus"])));
        assert!(registry.specs().iter().all(|s| s.module == Module::Serp));
    }

    #[test]
    fn test_tool_names_unique() {
        let registry = ToolRegistry::new(&modules(None));
        let mut names = registry.tool_names();
        names.sort_unstable();
        let len = names.len();
        names.dedup();
        assert_eq!(names.len(), len, "duplicate tool names in the catalog");
    }

    #[test]
    fn test_get_by_name() {
        let registry = ToolRegistry::new(&modules(None));
        let spec = registry.get("serp_organic_live_advanced").unwrap();
        assert_eq!(spec.module, Module::Serp);
        assert!(registry.get("nope").is_none());
    }
}
