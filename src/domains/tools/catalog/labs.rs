//! DataForSEO Labs module endpoints.

use serde_json::json;

use crate::core::client::HttpMethod;
use crate::domains::tools::registry::{LocationMode, ToolSpec};
use crate::domains::tools::schema::{ParamKind, ParamSpec};

use super::Module;

pub fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "dataforseo_labs_google_ranked_keywords",
            description: "Get the keywords a domain or webpage ranks for in Google organic \
                and paid search, with rank and keyword metrics.",
            module: Module::DataforseoLabs,
            method: HttpMethod::Post,
            path: "/v3/dataforseo_labs/google/ranked_keywords/live",
            params: vec![
                ParamSpec::required(
                    "target",
                    ParamKind::String,
                    "domain or webpage to analyze (domain without https:// and www.)",
                ),
                ParamSpec::optional(
                    "location_name",
                    ParamKind::String,
                    "full name of the location (country level)",
                )
                .with_default(json!("United States")),
                ParamSpec::optional(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                )
                .with_default(json!("en")),
                ParamSpec::optional("limit", ParamKind::Integer, "maximum number of keywords")
                    .with_default(json!(10)),
                ParamSpec::optional("offset", ParamKind::Integer, "offset in the results array"),
                ParamSpec::optional(
                    "include_subdomains",
                    ParamKind::Boolean,
                    "include keywords ranked by subdomains of the target",
                ),
                ParamSpec::optional(
                    "include_clickstream_data",
                    ParamKind::Boolean,
                    "include clickstream-based metrics in the response",
                ),
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
            location: LocationMode::Country,
            fields: Some(vec![
                "total_count",
                "items_count",
                "items.keyword_data.keyword",
                "items.keyword_data.keyword_info.search_volume",
                "items.keyword_data.keyword_info.cpc",
                "items.keyword_data.keyword_info.competition",
                "items.ranked_serp_element.serp_item.rank_absolute",
                "items.ranked_serp_element.serp_item.type",
                "items.ranked_serp_element.serp_item.title",
                "items.ranked_serp_element.serp_item.url",
            ]),
        },
        ToolSpec {
            name: "dataforseo_labs_google_keyword_ideas",
            description: "Get keyword ideas relevant to seed keywords by product category, \
                with search volume and difficulty metrics.",
            module: Module::DataforseoLabs,
            method: HttpMethod::Post,
            path: "/v3/dataforseo_labs/google/keyword_ideas/live",
            params: vec![
                ParamSpec::required(
                    "keywords",
                    ParamKind::StringArray,
                    "seed keywords (max 200)",
                ),
                ParamSpec::optional(
                    "location_name",
                    ParamKind::String,
                    "full name of the location (country level)",
                )
                .with_default(json!("United States")),
                ParamSpec::optional(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                )
                .with_default(json!("en")),
                ParamSpec::optional("limit", ParamKind::Integer, "maximum number of keywords")
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
            location: LocationMode::Country,
            fields: Some(vec![
                "total_count",
                "items_count",
                "items.keyword",
                "items.keyword_info.search_volume",
                "items.keyword_info.cpc",
                "items.keyword_info.competition",
                "items.keyword_properties.keyword_difficulty",
            ]),
        },
        ToolSpec {
            name: "dataforseo_labs_google_keyword_suggestions",
            description: "Get long-tail keyword suggestions that contain a seed keyword, \
                with search volume and difficulty metrics.",
            module: Module::DataforseoLabs,
            method: HttpMethod::Post,
            path: "/v3/dataforseo_labs/google/keyword_suggestions/live",
            params: vec![
                ParamSpec::required("keyword", ParamKind::String, "seed keyword"),
                ParamSpec::optional(
                    "location_name",
                    ParamKind::String,
                    "full name of the location (country level)",
                )
                .with_default(json!("United States")),
                ParamSpec::optional(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                )
                .with_default(json!("en")),
                ParamSpec::optional("limit", ParamKind::Integer, "maximum number of keywords")
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
            location: LocationMode::Country,
            fields: Some(vec![
                "total_count",
                "items_count",
                "items.keyword",
                "items.keyword_info.search_volume",
                "items.keyword_info.cpc",
                "items.keyword_info.competition",
                "items.keyword_properties.keyword_difficulty",
            ]),
        },
        ToolSpec {
            name: "dataforseo_labs_google_domain_rank_overview",
            description: "Get ranking and traffic overview for a domain in Google organic \
                and paid search.",
            module: Module::DataforseoLabs,
            method: HttpMethod::Post,
            path: "/v3/dataforseo_labs/google/domain_rank_overview/live",
            params: vec![
                ParamSpec::required(
                    "target",
                    ParamKind::String,
                    "domain to analyze (without https:// and www.)",
                ),
                ParamSpec::optional(
                    "location_name",
                    ParamKind::String,
                    "full name of the location (country level)",
                )
                .with_default(json!("United States")),
                ParamSpec::optional(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                )
                .with_default(json!("en")),
            ],
            location: LocationMode::Country,
            fields: Some(vec![
                "items_count",
                "items.metrics.organic.pos_1",
                "items.metrics.organic.pos_2_3",
                "items.metrics.organic.count",
                "items.metrics.organic.etv",
                "items.metrics.paid.count",
                "items.metrics.paid.etv",
            ]),
        },
        ToolSpec {
            name: "dataforseo_labs_google_competitors_domain",
            description: "Find domains competing with a target domain in Google organic \
                search, with intersecting keyword metrics.",
            module: Module::DataforseoLabs,
            method: HttpMethod::Post,
            path: "/v3/dataforseo_labs/google/competitors_domain/live",
            params: vec![
                ParamSpec::required(
                    "target",
                    ParamKind::String,
                    "domain to analyze (without https:// and www.)",
                ),
                ParamSpec::optional(
                    "location_name",
                    ParamKind::String,
                    "full name of the location (country level)",
                )
                .with_default(json!("United States")),
                ParamSpec::optional(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                )
                .with_default(json!("en")),
                ParamSpec::optional("limit", ParamKind::Integer, "maximum number of domains")
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
            location: LocationMode::Country,
            fields: Some(vec![
                "total_count",
                "items_count",
                "items.domain",
                "items.avg_position",
                "items.sum_position",
                "items.intersections",
                "items.metrics.organic.count",
                "items.metrics.organic.etv",
            ]),
        },
        ToolSpec {
            name: "dataforseo_labs_bulk_keyword_difficulty",
            description: "Get keyword difficulty scores for up to 1000 keywords in one call.",
            module: Module::DataforseoLabs,
            method: HttpMethod::Post,
            path: "/v3/dataforseo_labs/google/bulk_keyword_difficulty/live",
            params: vec![
                ParamSpec::required(
                    "keywords",
                    ParamKind::StringArray,
                    "keywords to score (max 1000)",
                ),
                ParamSpec::optional(
                    "location_name",
                    ParamKind::String,
                    "full name of the location (country level)",
                )
                .with_default(json!("United States")),
                ParamSpec::optional(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                )
                .with_default(json!("en")),
            ],
            location: LocationMode::Country,
            fields: Some(vec![
                "items_count",
                "items.keyword",
                "items.keyword_difficulty",
            ]),
        },
    ]
}
