//! OpenAPI 2.0 (Swagger) document model.
//!
//! Serde representation of the generated document tree. Every mapping is a
//! `BTreeMap` so that two runs over the same route table serialize to
//! byte-identical output regardless of hash seeding.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Complete OpenAPI 2.0 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    /// Specification version, always `"2.0"`
    pub swagger: String,
    /// API info
    pub info: Info,
    /// API host (name or ip, optionally with a port)
    pub host: String,
    /// Base path prefixed to all documented paths
    #[serde(rename = "basePath")]
    pub base_path: String,
    /// Transfer protocols, omitted when empty
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub schemes: Vec<String>,
    /// Accepted request MIME types, omitted when empty
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub consumes: Vec<String>,
    /// Produced response MIME types, omitted when empty
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub produces: Vec<String>,
    /// Named security schemes, present only when security parsing is enabled
    #[serde(
        rename = "securityDefinitions",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub security_definitions: Option<BTreeMap<String, SecurityScheme>>,
    /// Documented paths (normalized URI -> verb -> operation)
    pub paths: BTreeMap<String, PathItem>,
}

/// All operations registered under a single path, keyed by lower-cased verb
pub type PathItem = BTreeMap<String, Operation>;

/// OpenAPI Info object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,
    /// API description
    pub description: String,
    /// API version
    pub version: String,
}

/// A single documented operation (one path and verb pair)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Short summary from the handler's doc comment
    pub summary: String,
    /// Long description from the handler's doc comment
    pub description: String,
    /// Whether the handler is marked deprecated
    #[serde(default)]
    pub deprecated: bool,
    /// Parameters for this operation, omitted when there are none
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parameters: Option<Vec<Parameter>>,
    /// Responses by status code
    pub responses: BTreeMap<String, Response>,
    /// Security requirements, omitted when there are none
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub security: Option<Vec<SecurityRequirement>>,
}

/// A named reference to a security scheme plus the scopes it demands
pub type SecurityRequirement = BTreeMap<String, Vec<String>>;

/// OpenAPI Parameter object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Parameter location (path, query, body)
    #[serde(rename = "in")]
    pub location: String,
    /// Parameter type for path and query parameters
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub param_type: Option<String>,
    /// Whether the parameter is required; body parameters leave this unset
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub required: Option<bool>,
    /// Parameter description, omitted when empty
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub description: String,
    /// Allowed values, for fields constrained to a closed set
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none", default)]
    pub enum_values: Option<Vec<String>>,
    /// Item schema for array-typed query parameters
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub items: Option<Schema>,
    /// Nested schema carried by the single body parameter
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub schema: Option<Schema>,
}

/// OpenAPI Schema object, used for body parameters and their properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Schema {
    /// The schema type (object, string, integer, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub schema_type: Option<String>,
    /// Properties for object schemas
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub properties: Option<BTreeMap<String, Schema>>,
    /// Names of required properties for object schemas
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub required: Option<Vec<String>>,
    /// Item schema for array schemas
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub items: Option<Box<Schema>>,
    /// Allowed values for enum-constrained schemas
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none", default)]
    pub enum_values: Option<Vec<String>>,
}

impl Schema {
    /// A bare schema carrying only a type.
    pub fn of_type(schema_type: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            ..Self::default()
        }
    }
}

/// OpenAPI Response object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response description
    pub description: String,
}

impl Response {
    /// The fixed placeholder response attached to every operation.
    pub fn ok() -> Self {
        Self {
            description: "OK".to_string(),
        }
    }
}

/// OpenAPI Security Scheme object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SecurityScheme {
    /// Scheme type (`oauth2` or `apiKey`)
    #[serde(rename = "type")]
    pub scheme_type: String,
    /// OAuth flow, set for oauth2 schemes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub flow: Option<String>,
    /// Authorization endpoint, set for implicit and accessCode flows
    #[serde(
        rename = "authorizationUrl",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub authorization_url: Option<String>,
    /// Token endpoint, set for password, application and accessCode flows
    #[serde(rename = "tokenUrl", skip_serializing_if = "Option::is_none", default)]
    pub token_url: Option<String>,
    /// Scope name to description mapping, set for oauth2 schemes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scopes: Option<BTreeMap<String, String>>,
    /// Header or query parameter name, set for apiKey schemes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    /// Location of the key (`header` or `query`), set for apiKey schemes
    #[serde(rename = "in", skip_serializing_if = "Option::is_none", default)]
    pub location: Option<String>,
}
