//! SERP module endpoints.

use serde_json::json;

use crate::core::client::HttpMethod;
use crate::domains::tools::registry::{LocationMode, ToolSpec};
use crate::domains::tools::schema::{ParamKind, ParamSpec};

use super::Module;

pub fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "serp_organic_live_advanced",
            description: "Get search engine results for a keyword including organic results, \
                paid ads (when available), featured snippets, local pack, people also ask, \
                and other SERP features.",
            module: Module::Serp,
            method: HttpMethod::Post,
            path: "/v3/serp/{search_engine}/organic/live/advanced",
            params: vec![
                ParamSpec::optional(
                    "search_engine",
                    ParamKind::String,
                    "search engine name, one of: google, yahoo, bing",
                )
                .with_default(json!("google")),
                ParamSpec::required(
                    "location_name",
                    ParamKind::String,
                    "full name of the location; hierarchical, comma-separated \
                     (e.g. \"San Francisco,California,United States\") or free text",
                )
                .with_default(json!("United States")),
                ParamSpec::required(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                ),
                ParamSpec::required("keyword", ParamKind::String, "search keyword"),
                ParamSpec::optional(
                    "depth",
                    ParamKind::Integer,
                    "parsing depth: number of results in SERP",
                )
                .with_default(json!(10)),
                ParamSpec::optional(
                    "max_crawl_pages",
                    ParamKind::Integer,
                    "number of search results pages to crawl",
                ),
                ParamSpec::optional(
                    "device",
                    ParamKind::String,
                    "device type: desktop or mobile",
                )
                .with_default(json!("desktop")),
                ParamSpec::optional(
                    "people_also_ask_click_depth",
                    ParamKind::Integer,
                    "click depth on the people_also_ask element (1-4)",
                ),
            ],
            location: LocationMode::City,
            fields: Some(vec![
                "keyword",
                "type",
                "se_domain",
                "location_code",
                "language_code",
                "items_count",
                "items.type",
                "items.rank_group",
                "items.rank_absolute",
                "items.title",
                "items.domain",
                "items.description",
                "items.url",
            ]),
        },
        ToolSpec {
            name: "serp_google_news_live_advanced",
            description: "Get Google News results for a keyword, including top stories \
                and news items with their sources and timestamps.",
            module: Module::Serp,
            method: HttpMethod::Post,
            path: "/v3/serp/google/news/live/advanced",
            params: vec![
                ParamSpec::required(
                    "location_name",
                    ParamKind::String,
                    "full name of the location, hierarchical or free text",
                )
                .with_default(json!("United States")),
                ParamSpec::required(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                ),
                ParamSpec::required("keyword", ParamKind::String, "search keyword"),
                ParamSpec::optional(
                    "depth",
                    ParamKind::Integer,
                    "parsing depth: number of results in SERP",
                )
                .with_default(json!(10)),
            ],
            location: LocationMode::City,
            fields: Some(vec![
                "keyword",
                "items_count",
                "items.type",
                "items.rank_absolute",
                "items.title",
                "items.domain",
                "items.url",
                "items.source",
                "items.snippet",
                "items.timestamp",
            ]),
        },
        ToolSpec {
            name: "serp_google_maps_live_advanced",
            description: "Get Google Maps results for a keyword: local businesses with \
                ratings, categories, addresses and place identifiers.",
            module: Module::Serp,
            method: HttpMethod::Post,
            path: "/v3/serp/google/maps/live/advanced",
            params: vec![
                ParamSpec::required(
                    "location_name",
                    ParamKind::String,
                    "full name of the location, hierarchical or free text",
                )
                .with_default(json!("United States")),
                ParamSpec::required(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                ),
                ParamSpec::required("keyword", ParamKind::String, "search keyword"),
                ParamSpec::optional(
                    "depth",
                    ParamKind::Integer,
                    "parsing depth: number of results in SERP",
                )
                .with_default(json!(20)),
            ],
            location: LocationMode::City,
            fields: Some(vec![
                "keyword",
                "items_count",
                "items.type",
                "items.rank_absolute",
                "items.title",
                "items.category",
                "items.address",
                "items.rating.value",
                "items.rating.votes_count",
                "items.url",
                "items.place_id",
            ]),
        },
        ToolSpec {
            name: "serp_google_images_live_advanced",
            description: "Get Google Images results for a keyword, including image sources \
                and landing pages.",
            module: Module::Serp,
            method: HttpMethod::Post,
            path: "/v3/serp/google/images/live/advanced",
            params: vec![
                ParamSpec::required(
                    "location_name",
                    ParamKind::String,
                    "full name of the location, hierarchical or free text",
                )
                .with_default(json!("United States")),
                ParamSpec::required(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                ),
                ParamSpec::required("keyword", ParamKind::String, "search keyword"),
                ParamSpec::optional(
                    "depth",
                    ParamKind::Integer,
                    "parsing depth: number of results in SERP",
                )
                .with_default(json!(20)),
            ],
            location: LocationMode::City,
            fields: Some(vec![
                "keyword",
                "items_count",
                "items.type",
                "items.rank_absolute",
                "items.title",
                "items.source_url",
                "items.encoded_md5",
                "items.url",
            ]),
        },
        ToolSpec {
            name: "serp_locations_list",
            description: "List supported locations for a search engine. Useful for finding \
                the canonical location_name to pass to other SERP tools.",
            module: Module::Serp,
            method: HttpMethod::Get,
            path: "/v3/serp/{search_engine}/locations",
            params: vec![
                ParamSpec::optional(
                    "search_engine",
                    ParamKind::String,
                    "search engine name, one of: google, yahoo, bing",
                )
                .with_default(json!("google")),
            ],
            location: LocationMode::None,
            fields: Some(vec![
                "location_code",
                "location_name",
                "location_type",
                "country_iso_code",
            ]),
        },
    ]
}
