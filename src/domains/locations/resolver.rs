//! Location resolution.
//!
//! Converts free-text place names ("Brussels", "NYC", "England") into the
//! upstream's canonical comma-hierarchical `location_name` plus
//! `location_code`, e.g. `"Brussels,Brussels Capital,Belgium"`.
//!
//! Resolution always prefers city-level locations: many SERP features
//! (local pack, ads) only activate at city granularity, so even a country
//! input resolves to a representative city when one is available.
//!
//! Resolution fails softly. A network error, a non-success status or an
//! empty candidate list all yield `None`, and callers fall back to passing
//! the raw input through for the upstream to judge.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::core::client::DataForSeoClient;

use super::cache::{LocationCache, ResolvedLocation};

/// Location types that trigger city-granularity SERP features.
pub const CITY_LEVEL_TYPES: &[&str] = &["City", "Municipality", "Borough", "District", "DMA Region"];

/// One candidate returned by the remote location lookup. Only ever
/// deserialized from the upstream, never constructed locally.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationCandidate {
    pub location_code: i64,
    pub location_name: String,
    #[serde(default)]
    pub location_code_parent: Option<i64>,
    #[serde(default)]
    pub country_iso_code: Option<String>,
    pub location_type: String,
}

impl LocationCandidate {
    fn is_city_level(&self) -> bool {
        CITY_LEVEL_TYPES.contains(&self.location_type.as_str())
    }

    /// The city-level component: everything before the first comma.
    fn city_segment(&self) -> String {
        self.location_name
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase()
    }
}

/// Check whether a location string is already in the canonical hierarchical
/// format (at least "Region,Country"), letting callers skip resolution.
pub fn is_already_formatted(location: &str) -> bool {
    location
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .count()
        >= 2
}

/// Resolves free-text locations against the upstream lookup endpoint, with
/// an injected TTL cache.
pub struct LocationResolver {
    client: Arc<DataForSeoClient>,
    cache: LocationCache,
}

impl LocationResolver {
    pub fn new(client: Arc<DataForSeoClient>, cache: LocationCache) -> Self {
        Self { client, cache }
    }

    /// Resolve a location input for the given search engine.
    ///
    /// Within the cache TTL, repeated calls for the same normalized input
    /// issue no network traffic and return the cached pair unchanged.
    pub async fn resolve(&self, input: &str, search_engine: &str) -> Option<ResolvedLocation> {
        let normalized = input.trim().to_lowercase();

        if let Some(hit) = self.cache.get(search_engine, &normalized) {
            debug!(input, resolved = %hit.name, "location cache hit");
            return Some(hit);
        }

        let candidates = self.lookup(input, search_engine).await?;
        let best = find_best_match(&candidates, &normalized)?;
        let resolved = ResolvedLocation {
            code: best.location_code,
            name: best.location_name.clone(),
        };

        info!(
            input,
            resolved = %resolved.name,
            code = resolved.code,
            "location resolved"
        );
        self.cache.insert(search_engine, &normalized, resolved.clone());
        Some(resolved)
    }

    /// Resolve and keep only the country component, for endpoints that
    /// accept country-level names only.
    pub async fn resolve_to_country(&self, input: &str, search_engine: &str) -> Option<String> {
        let resolved = self.resolve(input, search_engine).await?;
        resolved
            .name
            .rsplit(',')
            .next()
            .map(|country| country.trim().to_string())
    }

    /// Drop all cached resolutions. Intended for test isolation.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Query the remote lookup endpoint. Any failure yields `None`.
    async fn lookup(&self, input: &str, search_engine: &str) -> Option<Vec<LocationCandidate>> {
        let path = format!("/v3/serp/{search_engine}/locations");
        let response = match self
            .client
            .post(&path, json!({ "location_name": input }))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!(input, error = %e, "location lookup failed");
                return None;
            }
        };

        let status_code = response.get("status_code").and_then(Value::as_i64);
        if status_code != Some(crate::domains::tools::response::SUCCESS_STATUS) {
            debug!(input, ?status_code, "location lookup returned non-success status");
            return None;
        }

        let result = response
            .get("tasks")
            .and_then(Value::as_array)
            .and_then(|tasks| tasks.first())
            .and_then(|task| task.get("result"))
            .cloned()?;

        let candidates: Vec<LocationCandidate> = serde_json::from_value(result).ok()?;
        if candidates.is_empty() {
            debug!(input, "location lookup returned no candidates");
            return None;
        }
        Some(candidates)
    }
}

/// Pick the best candidate for the normalized input.
///
/// Four tiers, first satisfied tier wins, candidates scanned in the order
/// received:
/// 1. city-level candidate whose city segment equals the input;
/// 2. city-level candidate whose region or country segment equals or
///    contains the input ("England" finds "London,England,United Kingdom");
/// 3. city-level candidate whose city segment contains, or is contained by,
///    the input;
/// 4. the first city-level candidate.
///
/// Falls back to the first candidate overall, even if not city-level.
fn find_best_match<'a>(
    candidates: &'a [LocationCandidate],
    normalized: &str,
) -> Option<&'a LocationCandidate> {
    let exact_city = candidates
        .iter()
        .find(|c| c.is_city_level() && c.city_segment() == normalized);
    if exact_city.is_some() {
        return exact_city;
    }

    let region_or_country = candidates.iter().find(|c| {
        c.is_city_level()
            && c.location_name
                .split(',')
                .skip(1)
                .map(|part| part.trim().to_lowercase())
                .any(|part| part == normalized || part.contains(normalized))
    });
    if region_or_country.is_some() {
        return region_or_country;
    }

    let partial_city = candidates.iter().find(|c| {
        if !c.is_city_level() {
            return false;
        }
        let city = c.city_segment();
        city.contains(normalized) || normalized.contains(city.as_str())
    });
    if partial_city.is_some() {
        return partial_city;
    }

    candidates
        .iter()
        .find(|c| c.is_city_level())
        .or_else(|| candidates.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CredentialsConfig;
    use chrono::TimeDelta;
    use serde_json::json;

    fn candidate(name: &str, location_type: &str, code: i64) -> LocationCandidate {
        LocationCandidate {
            location_code: code,
            location_name: name.to_string(),
            location_code_parent: None,
            country_iso_code: None,
            location_type: location_type.to_string(),
        }
    }

    #[test]
    fn test_exact_city_match_wins() {
        let candidates = vec![
            candidate("Paris,Texas,United States", "City", 1),
            candidate("Paris,Ile-de-France,France", "City", 2),
        ];
        // First exact city match in list order wins.
        let best = find_best_match(&candidates, "paris").unwrap();
        assert_eq!(best.location_code, 1);
    }

    #[test]
    fn test_region_input_resolves_to_city() {
        let candidates = vec![
            candidate("England", "Region", 10),
            candidate("London,England,United Kingdom", "City", 11),
        ];
        let best = find_best_match(&candidates, "england").unwrap();
        assert_eq!(best.location_name, "London,England,United Kingdom");
    }

    #[test]
    fn test_partial_city_match() {
        let candidates = vec![
            candidate("Germany", "Country", 20),
            candidate("New York,New York,United States", "City", 21),
        ];
        let best = find_best_match(&candidates, "new york city").unwrap();
        assert_eq!(best.location_code, 21);
    }

    #[test]
    fn test_first_city_level_fallback() {
        let candidates = vec![
            candidate("Texas,United States", "Region", 30),
            candidate("Austin,Texas,United States", "City", 31),
        ];
        let best = find_best_match(&candidates, "zzz").unwrap();
        assert_eq!(best.location_code, 31);
    }

    #[test]
    fn test_non_city_fallback() {
        let candidates = vec![candidate("France", "Country", 40)];
        let best = find_best_match(&candidates, "zzz").unwrap();
        assert_eq!(best.location_code, 40);
    }

    #[test]
    fn test_dma_region_is_city_level() {
        let candidates = vec![
            candidate("United States", "Country", 50),
            candidate("Denver CO,United States", "DMA Region", 51),
        ];
        let best = find_best_match(&candidates, "denver co").unwrap();
        assert_eq!(best.location_code, 51);
    }

    #[test]
    fn test_is_already_formatted() {
        assert!(is_already_formatted("Paris,Ile-de-France,France"));
        assert!(is_already_formatted("California,United States"));
        assert!(!is_already_formatted("Paris"));
        assert!(!is_already_formatted("Paris,"));
        assert!(!is_already_formatted(""));
    }

    fn lookup_body() -> String {
        json!({
            "status_code": 20000,
            "tasks": [{
                "result": [
                    {
                        "location_code": 1006886,
                        "location_name": "London,England,United Kingdom",
                        "location_code_parent": 20339,
                        "country_iso_code": "GB",
                        "location_type": "City"
                    },
                    {
                        "location_code": 20339,
                        "location_name": "England,United Kingdom",
                        "country_iso_code": "GB",
                        "location_type": "Region"
                    }
                ]
            }]
        })
        .to_string()
    }

    fn resolver_for(server: &mockito::Server, ttl: TimeDelta) -> LocationResolver {
        let credentials = CredentialsConfig {
            username: Some("login".to_string()),
            password: Some("secret".to_string()),
            base_url: Some(server.url()),
        };
        let client = Arc::new(DataForSeoClient::new(&credentials).unwrap());
        LocationResolver::new(client, LocationCache::with_ttl(ttl))
    }

    #[tokio::test]
    async fn test_resolve_caches_within_ttl() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/serp/google/locations")
            .with_body(lookup_body())
            .expect(1)
            .create_async()
            .await;

        let resolver = resolver_for(&server, TimeDelta::hours(24));
        let first = resolver.resolve("London", "google").await.unwrap();
        let second = resolver.resolve(" london ", "google").await.unwrap();

        mock.assert_async().await;
        assert_eq!(first, second);
        assert_eq!(first.name, "London,England,United Kingdom");
        assert_eq!(first.code, 1006886);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_fresh_lookup() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/serp/google/locations")
            .with_body(lookup_body())
            .expect(2)
            .create_async()
            .await;

        let resolver = resolver_for(&server, TimeDelta::zero());
        resolver.resolve("London", "google").await.unwrap();
        resolver.resolve("London", "google").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_clear_cache_forces_lookup() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v3/serp/google/locations")
            .with_body(lookup_body())
            .expect(2)
            .create_async()
            .await;

        let resolver = resolver_for(&server, TimeDelta::hours(24));
        resolver.resolve("London", "google").await.unwrap();
        resolver.clear_cache();
        resolver.resolve("London", "google").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_resolve_to_country() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v3/serp/google/locations")
            .with_body(lookup_body())
            .create_async()
            .await;

        let resolver = resolver_for(&server, TimeDelta::hours(24));
        let country = resolver.resolve_to_country("London", "google").await;
        assert_eq!(country.as_deref(), Some("United Kingdom"));
    }

    #[tokio::test]
    async fn test_network_failure_resolves_softly() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v3/serp/google/locations")
            .with_status(500)
            .create_async()
            .await;

        let resolver = resolver_for(&server, TimeDelta::hours(24));
        assert!(resolver.resolve("London", "google").await.is_none());
    }

    #[tokio::test]
    async fn test_non_success_status_resolves_softly() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v3/serp/google/locations")
            .with_body(r#"{"status_code":40101,"status_message":"Auth error.","tasks":[]}"#)
            .create_async()
            .await;

        let resolver = resolver_for(&server, TimeDelta::hours(24));
        assert!(resolver.resolve("London", "google").await.is_none());
    }
}
