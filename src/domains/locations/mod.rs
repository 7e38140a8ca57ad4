//! Locations domain module.
//!
//! Turns free-text place names into the upstream API's canonical location
//! identifiers, backed by a time-bounded in-memory cache.
//!
//! - `cache.rs` - TTL cache, explicitly constructed and injected
//! - `resolver.rs` - remote lookup plus city-first tiered ranking

mod cache;
mod resolver;

pub use cache::{LocationCache, ResolvedLocation};
pub use resolver::{CITY_LEVEL_TYPES, LocationCandidate, LocationResolver, is_already_formatted};
