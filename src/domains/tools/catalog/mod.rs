//! Endpoint catalog.
//!
//! The catalog is configuration data: one file per upstream API module, each
//! returning the [`ToolSpec`](super::registry::ToolSpec) rows for its
//! endpoints. The generic dispatcher does the rest.

mod keywords;
mod labs;
mod onpage;
mod serp;

use super::registry::ToolSpec;

/// Upstream API modules the server can expose. The `ENABLED_MODULES`
/// environment variable selects a subset; empty means all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Serp,
    KeywordsData,
    DataforseoLabs,
    OnPage,
}

impl Module {
    pub const ALL: [Module; 4] = [
        Module::Serp,
        Module::KeywordsData,
        Module::DataforseoLabs,
        Module::OnPage,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Serp => "serp",
            Self::KeywordsData => "keywords_data",
            Self::DataforseoLabs => "dataforseo_labs",
            Self::OnPage => "onpage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "serp" => Some(Self::Serp),
            "keywords_data" => Some(Self::KeywordsData),
            "dataforseo_labs" => Some(Self::DataforseoLabs),
            "onpage" | "on_page" => Some(Self::OnPage),
            _ => None,
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every tool in the catalog, across all modules.
pub fn full_catalog() -> Vec<ToolSpec> {
    let mut specs = Vec::new();
    specs.extend(serp::tools());
    specs.extend(keywords::tools());
    specs.extend(labs::tools());
    specs.extend(onpage::tools());
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_parse_round_trip() {
        for module in Module::ALL {
            assert_eq!(Module::parse(module.as_str()), Some(module));
        }
        assert_eq!(Module::parse("ON_PAGE"), Some(Module::OnPage));
        assert_eq!(Module::parse("backlinks"), None);
    }

    #[test]
    fn test_catalog_rows_are_well_formed() {
        for spec in full_catalog() {
            assert!(!spec.name.is_empty());
            assert!(!spec.description.is_empty());
            assert!(spec.path.starts_with("/v3/"), "{} path: {}", spec.name, spec.path);

            // Every path placeholder must be backed by a required parameter.
            let mut rest = spec.path;
            while let Some(start) = rest.find('{') {
                let end = rest[start..].find('}').expect("unclosed placeholder") + start;
                let placeholder = &rest[start + 1..end];
                let param = spec
                    .params
                    .iter()
                    .find(|p| p.name == placeholder)
                    .unwrap_or_else(|| {
                        panic!("{}: no param backing {{{placeholder}}}", spec.name)
                    });
                assert!(
                    param.required || param.default.is_some(),
                    "{}: path param {placeholder} can be absent",
                    spec.name
                );
                rest = &rest[end + 1..];
            }

            if let Some(fields) = &spec.fields {
                assert!(!fields.is_empty(), "{}: empty projection list", spec.name);
            }
        }
    }
}
