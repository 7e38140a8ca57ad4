//! Order compiler for `order_by` parameters.
//!
//! Sorting rules arrive as `"field,direction"` strings. The upstream API
//! accepts at most three rules per request; extras are secondary tie-breaks
//! whose loss degrades gracefully, so they are dropped silently rather than
//! rejected.

use serde_json::Value;
use tracing::warn;

/// Documented upstream limit on sorting rules per request.
pub const MAX_ORDER_RULES: usize = 3;

/// Sort direction for a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// A validated sorting rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl OrderSpec {
    /// Parse a `"field,direction"` entry. Fields may contain dots but not
    /// commas, so the direction is everything after the last comma.
    pub fn parse(entry: &str) -> Option<Self> {
        let (field, direction) = entry.rsplit_once(',')?;
        let direction = SortDirection::parse(direction.trim())?;
        let field = field.trim();
        if field.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            direction,
        })
    }

    /// Encode back to the wire form.
    pub fn encode(&self) -> String {
        format!("{},{}", self.field, self.direction.as_str())
    }
}

/// Compile a client-supplied `order_by` value for the upstream request body.
///
/// Caps the sequence at [`MAX_ORDER_RULES`] entries, preserving order.
/// Entries that do not parse as `"field,direction"` are forwarded unchanged
/// with a warning; the upstream validates the rest.
pub fn compile(order_by: Option<&Value>) -> Option<Value> {
    let value = order_by?;
    if value.is_null() {
        return None;
    }

    let Some(entries) = value.as_array() else {
        return Some(value.clone());
    };

    if entries.len() > MAX_ORDER_RULES {
        warn!(
            rules = entries.len(),
            kept = MAX_ORDER_RULES,
            "order_by exceeds the upstream rule limit; dropping extras"
        );
    }

    let capped: Vec<Value> = entries
        .iter()
        .take(MAX_ORDER_RULES)
        .inspect(|entry| {
            if let Some(s) = entry.as_str()
                && OrderSpec::parse(s).is_none()
            {
                warn!(entry = s, "order_by entry is not in \"field,direction\" form");
            }
        })
        .cloned()
        .collect();

    Some(Value::Array(capped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_valid_entry() {
        let spec = OrderSpec::parse("keyword_data.keyword_info.search_volume,desc").unwrap();
        assert_eq!(spec.field, "keyword_data.keyword_info.search_volume");
        assert_eq!(spec.direction, SortDirection::Desc);
        assert_eq!(spec.encode(), "keyword_data.keyword_info.search_volume,desc");
    }

    #[test]
    fn test_parse_rejects_bad_entries() {
        assert!(OrderSpec::parse("search_volume").is_none());
        assert!(OrderSpec::parse("search_volume,down").is_none());
        assert!(OrderSpec::parse(",asc").is_none());
    }

    #[test]
    fn test_cap_keeps_first_three_in_order() {
        let input = json!(["a,asc", "b,desc", "c,asc", "d,desc", "e,asc"]);
        let compiled = compile(Some(&input)).unwrap();
        assert_eq!(compiled, json!(["a,asc", "b,desc", "c,asc"]));
    }

    #[test]
    fn test_under_cap_unchanged() {
        let input = json!(["rank_group,asc"]);
        assert_eq!(compile(Some(&input)), Some(input));
    }

    #[test]
    fn test_none_passthrough() {
        assert_eq!(compile(None), None);
        assert_eq!(compile(Some(&Value::Null)), None);
    }
}
