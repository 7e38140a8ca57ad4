//! Keywords Data module endpoints.

use serde_json::json;

use crate::core::client::HttpMethod;
use crate::domains::tools::registry::{LocationMode, ToolSpec};
use crate::domains::tools::schema::{ParamKind, ParamSpec};

use super::Module;

pub fn tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "keywords_data_google_ads_search_volume",
            description: "Get search volume, CPC and competition data from Google Ads for \
                up to 1000 keywords.",
            module: Module::KeywordsData,
            method: HttpMethod::Post,
            path: "/v3/keywords_data/google_ads/search_volume/live",
            params: vec![
                ParamSpec::required(
                    "keywords",
                    ParamKind::StringArray,
                    "keywords to get search volume for (max 1000)",
                ),
                ParamSpec::optional(
                    "location_name",
                    ParamKind::String,
                    "full name of the location, hierarchical or free text",
                ),
                ParamSpec::optional(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                ),
            ],
            location: LocationMode::City,
            fields: Some(vec![
                "keyword",
                "spell",
                "location_code",
                "language_code",
                "search_partners",
                "competition",
                "competition_index",
                "search_volume",
                "low_top_of_page_bid",
                "high_top_of_page_bid",
                "cpc",
            ]),
        },
        ToolSpec {
            name: "keywords_data_google_ads_keywords_for_site",
            description: "Get keyword suggestions relevant to a website, with search volume \
                and competition metrics from Google Ads.",
            module: Module::KeywordsData,
            method: HttpMethod::Post,
            path: "/v3/keywords_data/google_ads/keywords_for_site/live",
            params: vec![
                ParamSpec::required(
                    "target",
                    ParamKind::String,
                    "target website or page url",
                ),
                ParamSpec::optional(
                    "target_type",
                    ParamKind::String,
                    "search keywords for the whole 'site' or a single 'page'",
                )
                .with_default(json!("page")),
                ParamSpec::optional(
                    "location_name",
                    ParamKind::String,
                    "full name of the location, hierarchical or free text",
                ),
                ParamSpec::optional(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                ),
            ],
            location: LocationMode::City,
            fields: Some(vec![
                "keyword",
                "location_code",
                "language_code",
                "competition",
                "competition_index",
                "search_volume",
                "cpc",
            ]),
        },
        ToolSpec {
            name: "keywords_data_google_ads_ad_traffic_by_keywords",
            description: "Estimate ad impressions, clicks and cost for keywords at a given \
                bid, using Google Ads forecasting data.",
            module: Module::KeywordsData,
            method: HttpMethod::Post,
            path: "/v3/keywords_data/google_ads/ad_traffic_by_keywords/live",
            params: vec![
                ParamSpec::required(
                    "keywords",
                    ParamKind::StringArray,
                    "keywords to forecast traffic for (max 1000)",
                ),
                ParamSpec::required("bid", ParamKind::Number, "maximum custom bid"),
                ParamSpec::required(
                    "match",
                    ParamKind::String,
                    "keyword match type: exact, broad or phrase",
                ),
                ParamSpec::optional(
                    "location_name",
                    ParamKind::String,
                    "full name of the location, hierarchical or free text",
                ),
                ParamSpec::optional(
                    "language_code",
                    ParamKind::String,
                    "search engine language code (e.g. 'en')",
                ),
            ],
            location: LocationMode::City,
            fields: Some(vec![
                "keyword",
                "location_code",
                "language_code",
                "bid",
                "match",
                "impressions",
                "ctr",
                "average_cpc",
                "cost",
                "clicks",
            ]),
        },
        ToolSpec {
            name: "keywords_data_google_trends_explore",
            description: "Get keyword popularity over time from Google Trends, comparable \
                across up to 5 keywords.",
            module: Module::KeywordsData,
            method: HttpMethod::Post,
            path: "/v3/keywords_data/google_trends/explore/live",
            params: vec![
                ParamSpec::required(
                    "keywords",
                    ParamKind::StringArray,
                    "keywords to compare (max 5)",
                ),
                ParamSpec::optional(
                    "location_name",
                    ParamKind::String,
                    "full name of the location, hierarchical or free text",
                ),
                ParamSpec::optional(
                    "date_from",
                    ParamKind::String,
                    "starting date of the time range, yyyy-mm-dd",
                ),
                ParamSpec::optional(
                    "date_to",
                    ParamKind::String,
                    "ending date of the time range, yyyy-mm-dd",
                ),
                ParamSpec::optional(
                    "type",
                    ParamKind::String,
                    "google trends type: web, news, youtube, images, froogle",
                )
                .with_default(json!("web")),
            ],
            location: LocationMode::Country,
            fields: Some(vec![
                "keywords",
                "location_code",
                "items.type",
                "items.title",
                "items.keywords",
                "items.data",
            ]),
        },
    ]
}
