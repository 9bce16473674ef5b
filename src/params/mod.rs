//! Parameter schema generation from validation rule sets.
//!
//! This module provides a unified interface for turning a handler's rule set (and,
//! for path parameters, the raw URI template) into OpenAPI parameter descriptors.
//! Each parameter location has its own generator implementation:
//!
//! - **Path**: See [`path::PathParameters`]
//! - **Query**: See [`query::QueryParameters`]
//! - **Body**: See [`body::BodyParameters`]
//!
//! Which of query or body applies to an operation is decided by the document
//! generator from the HTTP verb; path parameters are generated for every verb and
//! prepended to the result.

pub mod body;
pub mod path;
pub mod query;

use crate::document::Parameter;
use crate::rules::RuleSet;

/// Per-operation context handed to the generators.
pub struct ParamContext<'a> {
    /// The route's raw URI template, optional-segment markers included
    pub original_uri: &'a str,
}

/// Trait for generating parameter descriptors from a rule set.
///
/// Implementations know how to express the fields of a rule set at one parameter
/// location (path, query or body).
pub trait ParameterGenerator {
    /// Generate parameter descriptors for one operation.
    fn generate(&self, rules: &RuleSet, ctx: &ParamContext) -> Vec<Parameter>;
}

/// Infer the OpenAPI type of a field from its constraint tokens.
///
/// The first recognized type token in declaration order wins; unrecognized tokens
/// (`email`, `exists:users,id`, ...) contribute no type.
pub(crate) fn infer_type(tokens: &[String]) -> Option<&'static str> {
    tokens.iter().find_map(|token| match token.as_str() {
        "integer" => Some("integer"),
        "numeric" => Some("number"),
        "boolean" => Some("boolean"),
        "array" => Some("array"),
        "string" => Some("string"),
        _ => None,
    })
}

/// Whether the constraint tokens mark the field as required.
pub(crate) fn is_required(tokens: &[String]) -> bool {
    tokens.iter().any(|token| token == "required")
}

/// Allowed values declared via an `in:a,b,c` constraint token, if any.
pub(crate) fn enum_values(tokens: &[String]) -> Option<Vec<String>> {
    tokens
        .iter()
        .find_map(|token| token.strip_prefix("in:"))
        .map(|args| args.split(',').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_infer_type_first_recognized_token_wins() {
        assert_eq!(infer_type(&tokens(&["required", "integer"])), Some("integer"));
        assert_eq!(infer_type(&tokens(&["numeric"])), Some("number"));
        assert_eq!(infer_type(&tokens(&["boolean"])), Some("boolean"));
        assert_eq!(infer_type(&tokens(&["array"])), Some("array"));
        assert_eq!(infer_type(&tokens(&["string", "integer"])), Some("string"));
    }

    #[test]
    fn test_infer_type_ignores_unrecognized_tokens() {
        assert_eq!(infer_type(&tokens(&["required", "email"])), None);
        assert_eq!(infer_type(&tokens(&["exists:users,id", "integer"])), Some("integer"));
    }

    #[test]
    fn test_is_required_exact_token_only() {
        assert!(is_required(&tokens(&["required", "string"])));
        assert!(!is_required(&tokens(&["required_if:other,1", "string"])));
        assert!(!is_required(&tokens(&["string"])));
    }

    #[test]
    fn test_enum_values_from_in_token() {
        assert_eq!(
            enum_values(&tokens(&["required", "in:small,medium,large"])),
            Some(vec![
                "small".to_string(),
                "medium".to_string(),
                "large".to_string()
            ])
        );
        assert_eq!(enum_values(&tokens(&["required", "string"])), None);
    }
}
