//! Tool router - builds the rmcp ToolRouter from the registry.
//!
//! Every registered [`ToolSpec`] becomes one route backed by the same
//! generic dispatch function; the route closure only captures its spec row
//! and the shared [`ToolContext`].

use std::sync::Arc;

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};
use rmcp::model::Tool;

use super::dispatch::{self, ToolContext};
use super::registry::{ToolRegistry, ToolSpec};
use super::schema;

/// Build the tool router for all tools in the registry.
pub fn build_tool_router<S>(registry: &ToolRegistry, context: Arc<ToolContext>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();
    for spec in registry.specs() {
        router = router.with_route(make_route(spec.clone(), context.clone()));
    }
    router
}

fn make_route<S>(spec: Arc<ToolSpec>, context: Arc<ToolContext>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let tool = Tool {
        name: spec.name.into(),
        description: Some(spec.description.into()),
        input_schema: Arc::new(schema::input_schema(&spec.params)),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    };

    ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let spec = spec.clone();
        let context = context.clone();
        async move { Ok(dispatch::execute(&spec, &context, &args).await) }.boxed()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::client::DataForSeoClient;
    use crate::core::config::{CredentialsConfig, ModulesConfig};
    use crate::domains::locations::{LocationCache, LocationResolver};

    struct TestServer {}

    fn test_context() -> Arc<ToolContext> {
        let credentials = CredentialsConfig {
            username: Some("login".to_string()),
            password: Some("secret".to_string()),
            base_url: None,
        };
        let client = Arc::new(DataForSeoClient::new(&credentials).unwrap());
        let resolver = Arc::new(LocationResolver::new(client.clone(), LocationCache::new()));
        Arc::new(ToolContext {
            client,
            resolver,
            full_response: false,
        })
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same tools
        let registry = ToolRegistry::new(&ModulesConfig::default());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(&registry, test_context());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_routes_carry_input_schemas() {
        let registry = ToolRegistry::new(&ModulesConfig::default());
        let router: ToolRouter<TestServer> = build_tool_router(&registry, test_context());

        for tool in router.list_all() {
            assert!(tool.description.is_some());
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&serde_json::json!("object"))
            );
        }
    }
}
