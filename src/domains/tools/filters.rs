//! Filter expression compiler.
//!
//! DataForSEO endpoints accept filters as a recursive nested-array encoding:
//! a condition is `[field, operator, value]` and conditions combine as
//! `[left, "and"|"or", right]` to arbitrary depth. Clients send that array
//! form as JSON; this module parses it into a typed [`FilterExpression`] tree
//! and compiles it back to the wire encoding, preserving nesting exactly.
//!
//! The compiler is a structural mapper, not a validator: a 3-element array
//! that does not parse as a condition or a logical group passes through
//! unchanged and the upstream API decides whether to reject it.

use serde_json::{Value, json};
use tracing::warn;

/// Upstream limit on conditions per filter array. Policy only; oversized
/// filters are forwarded and rejected upstream.
pub const MAX_FILTER_CONDITIONS: usize = 8;

/// Comparison operators accepted in a filter condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    In,
    NotIn,
    Like,
    NotLike,
    ILike,
    NotILike,
    Regex,
    NotRegex,
    Match,
    NotMatch,
}

impl ComparisonOperator {
    /// The wire representation of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Like => "like",
            Self::NotLike => "not_like",
            Self::ILike => "ilike",
            Self::NotILike => "not_ilike",
            Self::Regex => "regex",
            Self::NotRegex => "not_regex",
            Self::Match => "match",
            Self::NotMatch => "not_match",
        }
    }

    /// Parse an operator from its wire representation.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "=" => Self::Eq,
            "<>" => Self::Ne,
            "<" => Self::Lt,
            "<=" => Self::Le,
            ">" => Self::Gt,
            ">=" => Self::Ge,
            "in" => Self::In,
            "not_in" => Self::NotIn,
            "like" => Self::Like,
            "not_like" => Self::NotLike,
            "ilike" => Self::ILike,
            "not_ilike" => Self::NotILike,
            "regex" => Self::Regex,
            "not_regex" => Self::NotRegex,
            "match" => Self::Match,
            "not_match" => Self::NotMatch,
            _ => return None,
        })
    }
}

/// Logical operators joining two filter subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "and" => Some(Self::And),
            "or" => Some(Self::Or),
            _ => None,
        }
    }
}

/// A parsed filter tree.
///
/// `Raw` holds anything that did not parse as a condition or a group; it is
/// forwarded byte-for-byte so malformed input fails upstream, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpression {
    /// A single `[field, operator, value]` condition.
    Condition {
        field: String,
        op: ComparisonOperator,
        value: Value,
    },
    /// Two subtrees joined by a logical operator.
    Group {
        left: Box<FilterExpression>,
        op: LogicalOperator,
        right: Box<FilterExpression>,
    },
    /// Unrecognized structure, passed through unchanged.
    Raw(Value),
}

impl FilterExpression {
    /// Parse the nested-array encoding into a typed tree.
    pub fn from_value(value: &Value) -> Self {
        if let Some(parts) = value.as_array()
            && parts.len() == 3
            && let Some(middle) = parts[1].as_str()
        {
            if let Some(op) = LogicalOperator::parse(middle) {
                return Self::Group {
                    left: Box::new(Self::from_value(&parts[0])),
                    op,
                    right: Box::new(Self::from_value(&parts[2])),
                };
            }
            if let (Some(field), Some(op)) =
                (parts[0].as_str(), ComparisonOperator::parse(middle))
            {
                return Self::Condition {
                    field: field.to_string(),
                    op,
                    value: parts[2].clone(),
                };
            }
        }
        Self::Raw(value.clone())
    }

    /// Compile the tree back into the upstream wire encoding.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Condition { field, op, value } => json!([field, op.as_str(), value]),
            Self::Group { left, op, right } => {
                json!([left.to_value(), op.as_str(), right.to_value()])
            }
            Self::Raw(value) => value.clone(),
        }
    }

    /// Number of conditions in the tree. Raw nodes count as one.
    pub fn condition_count(&self) -> usize {
        match self {
            Self::Condition { .. } | Self::Raw(_) => 1,
            Self::Group { left, right, .. } => left.condition_count() + right.condition_count(),
        }
    }
}

/// Compile a client-supplied `filters` value for the upstream request body.
///
/// `None` or JSON null means "no filtering" and passes through as `None`.
pub fn compile(filters: Option<&Value>) -> Option<Value> {
    let value = filters?;
    if value.is_null() {
        return None;
    }

    let expr = FilterExpression::from_value(value);
    let count = expr.condition_count();
    if count > MAX_FILTER_CONDITIONS {
        warn!(
            conditions = count,
            limit = MAX_FILTER_CONDITIONS,
            "filter exceeds the upstream condition limit; forwarding as-is"
        );
    }
    Some(expr.to_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_round_trip() {
        let input = json!(["keyword_data.keyword_info.search_volume", ">", 100]);
        assert_eq!(compile(Some(&input)), Some(input));
    }

    #[test]
    fn test_group_round_trip() {
        let input = json!([["a", ">", 1], "and", ["b", "=", "x"]]);
        assert_eq!(compile(Some(&input)), Some(input));
    }

    #[test]
    fn test_nested_group_preserves_depth() {
        let input = json!([
            ["keyword_data.keyword_info.search_volume", "<>", 0],
            "and",
            [["serp_item.type", "<>", "paid"], "or", ["serp_item.is_malicious", "=", false]]
        ]);
        let compiled = compile(Some(&input)).unwrap();
        assert_eq!(compiled, input);

        let expr = FilterExpression::from_value(&input);
        assert_eq!(expr.condition_count(), 3);
        assert!(matches!(expr, FilterExpression::Group { .. }));
    }

    #[test]
    fn test_none_passthrough() {
        assert_eq!(compile(None), None);
        assert_eq!(compile(Some(&Value::Null)), None);
    }

    #[test]
    fn test_malformed_condition_passthrough() {
        // Wrong arity and unknown operator both survive unchanged.
        let wrong_arity = json!(["field", "="]);
        assert_eq!(compile(Some(&wrong_arity)), Some(wrong_arity));

        let unknown_op = json!(["field", "between", [1, 2]]);
        assert_eq!(compile(Some(&unknown_op)), Some(unknown_op));
    }

    #[test]
    fn test_oversized_filter_is_forwarded() {
        let leaf = json!(["f", "=", 1]);
        let mut tree = leaf.clone();
        for _ in 0..9 {
            tree = json!([tree, "or", leaf]);
        }
        let expr = FilterExpression::from_value(&tree);
        assert!(expr.condition_count() > MAX_FILTER_CONDITIONS);
        assert_eq!(compile(Some(&tree)), Some(tree));
    }

    #[test]
    fn test_operator_parse_all() {
        for op in [
            "=", "<>", "<", "<=", ">", ">=", "in", "not_in", "like", "not_like", "ilike",
            "not_ilike", "regex", "not_regex", "match", "not_match",
        ] {
            let parsed = ComparisonOperator::parse(op).unwrap();
            assert_eq!(parsed.as_str(), op);
        }
        assert!(ComparisonOperator::parse("==").is_none());
    }
}
