//! OnPage module endpoints.
//!
//! OnPage crawls run as asynchronous tasks: `onpage_task_post` starts a
//! crawl, the remaining tools read its results by task id. The id travels
//! in the request path rather than the body, which is why these rows lean
//! on `{id}` placeholders.

use serde_json::json;

use crate::core::client::HttpMethod;
use crate::domains::tools::registry::{LocationMode, ToolSpec};
use crate::domains::tools::schema::{ParamKind, ParamSpec};

use super::Module;

pub fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "onpage_task_post",
            description: "Start an OnPage crawl of a website. Returns a task id used by the \
                other onpage tools to read crawl results once the task completes.",
            module: Module::OnPage,
            method: HttpMethod::Post,
            path: "/v3/on_page/task_post",
            params: vec![
                ParamSpec::required("target", ParamKind::String, "target domain to crawl"),
                ParamSpec::optional(
                    "max_crawl_pages",
                    ParamKind::Integer,
                    "number of pages to crawl",
                )
                .with_default(json!(10)),
                ParamSpec::optional(
                    "start_url",
                    ParamKind::String,
                    "first url to crawl, defaults to the target homepage",
                ),
                ParamSpec::optional(
                    "respect_sitemap",
                    ParamKind::Boolean,
                    "follow the order of pages in the sitemap while crawling",
                ),
                ParamSpec::optional(
                    "custom_sitemap",
                    ParamKind::String,
                    "url of a custom sitemap to follow",
                ),
                ParamSpec::optional(
                    "crawl_delay",
                    ParamKind::Integer,
                    "delay between hits in milliseconds",
                ),
                ParamSpec::optional(
                    "enable_javascript",
                    ParamKind::Boolean,
                    "load javascript on pages while crawling",
                ),
            ],
            location: LocationMode::None,
            // Task ids live outside tasks[0].result, so this row always
            // returns the full envelope.
            fields: None,
        },
        ToolSpec {
            name: "onpage_summary",
            description: "Get the overall crawl progress and summary metrics of an OnPage \
                task: pages crawled, checks, and detected issues.",
            module: Module::OnPage,
            method: HttpMethod::Get,
            path: "/v3/on_page/summary/{id}",
            params: vec![
                ParamSpec::required("id", ParamKind::String, "id of the OnPage task"),
            ],
            location: LocationMode::None,
            fields: Some(vec![
                "crawl_progress",
                "crawl_status",
                "domain_info.name",
                "domain_info.total_pages",
                "domain_info.checks",
                "page_metrics",
            ]),
        },
        ToolSpec {
            name: "onpage_pages",
            description: "Get the crawled pages of an OnPage task with their status codes, \
                checks and onpage scores. Supports filtering and sorting.",
            module: Module::OnPage,
            method: HttpMethod::Post,
            path: "/v3/on_page/pages/{id}",
            params: vec![
                ParamSpec::required("id", ParamKind::String, "id of the OnPage task"),
                ParamSpec::optional("limit", ParamKind::Integer, "maximum number of pages")
                    .with_default(json!(10)),
                ParamSpec::optional("offset", ParamKind::Integer, "offset in the results array"),
                ParamSpec::optional(
                    "filters",
                    ParamKind::Filters,
                    "filter conditions as [field, operator, value] triples, \
                     optionally joined with 'and'/'or'",
                ),
                ParamSpec::optional(
                    "order_by",
                    ParamKind::OrderBy,
                    "sorting rules as 'field,asc' or 'field,desc' strings (max 3)",
                ),
            ],
            location: LocationMode::None,
            fields: Some(vec![
                "crawl_progress",
                "total_items_count",
                "items_count",
                "items.url",
                "items.status_code",
                "items.onpage_score",
                "items.meta.title",
                "items.meta.description",
                "items.checks",
            ]),
        },
        ToolSpec {
            name: "onpage_links",
            description: "Get internal and external links discovered by an OnPage crawl, \
                with source and destination pages.",
            module: Module::OnPage,
            method: HttpMethod::Post,
            path: "/v3/on_page/links/{id}",
            params: vec![
                ParamSpec::required("id", ParamKind::String, "id of the OnPage task"),
                ParamSpec::optional("limit", ParamKind::Integer, "maximum number of links")
                    .with_default(json!(10)),
                ParamSpec::optional("offset", ParamKind::Integer, "offset in the results array"),
                ParamSpec::optional(
                    "page_from",
                    ParamKind::String,
                    "relative url of the page to return links from",
                ),
                ParamSpec::optional(
                    "filters",
                    ParamKind::Filters,
                    "filter conditions as [field, operator, value] triples, \
                     optionally joined with 'and'/'or'",
                ),
            ],
            location: LocationMode::None,
            fields: Some(vec![
                "total_items_count",
                "items_count",
                "items.type",
                "items.domain_from",
                "items.domain_to",
                "items.page_from",
                "items.page_to",
                "items.link_from",
                "items.link_to",
                "items.dofollow",
            ]),
        },
    ]
}
