//! Generator configuration.
//!
//! The configuration surface mirrors what a host application would keep in its
//! documentation config file. Keys are camelCased on the wire so a config section
//! can be embedded directly in a route manifest.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The closed set of OAuth flows a security definition may be configured with.
pub const AUTH_FLOWS: [&str; 5] = [
    "password",
    "application",
    "implicit",
    "accessCode",
    "apiKey",
];

/// Configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Document title
    pub title: String,
    /// Document description
    pub description: String,
    /// Documented API version
    pub app_version: String,
    /// API host
    pub host: String,
    /// Base path prefixed to all paths
    pub base_path: String,
    /// Transfer protocols; empty means unspecified
    pub schemes: Vec<String>,
    /// Accepted request MIME types; empty means unspecified
    pub consumes: Vec<String>,
    /// Produced response MIME types; empty means unspecified
    pub produces: Vec<String>,
    /// Whether to emit security definitions and per-operation requirements
    pub parse_security: bool,
    /// Whether to parse handler doc comments
    pub parse_doc_block: bool,
    /// Verbs never documented, compared case-insensitively
    pub ignored_methods: Vec<String>,
    /// OAuth flow for the emitted security scheme; must be one of [`AUTH_FLOWS`]
    pub auth_flow: String,
    /// Name of the emitted security scheme
    pub security_definition: String,
    /// Authorization endpoint for implicit and accessCode flows
    pub authorization_url: String,
    /// Token endpoint for password, application and accessCode flows
    pub token_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            title: "API Documentation".to_string(),
            description: String::new(),
            app_version: "1.0.0".to_string(),
            host: "localhost".to_string(),
            base_path: "/".to_string(),
            schemes: Vec::new(),
            consumes: Vec::new(),
            produces: Vec::new(),
            parse_security: true,
            parse_doc_block: true,
            ignored_methods: vec!["head".to_string(), "options".to_string()],
            auth_flow: "accessCode".to_string(),
            security_definition: "OAuth2".to_string(),
            authorization_url: "/oauth/authorize".to_string(),
            token_url: "/oauth/token".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Validate the configured auth flow against the closed [`AUTH_FLOWS`] set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAuthFlow`] when the flow is not a member. This is
    /// the one configuration error that aborts a run.
    pub fn validate_auth_flow(&self) -> Result<()> {
        if AUTH_FLOWS.contains(&self.auth_flow.as_str()) {
            Ok(())
        } else {
            Err(Error::InvalidAuthFlow(self.auth_flow.clone()))
        }
    }

    /// Whether a verb is in the configured ignore list.
    pub fn is_ignored_method(&self, method: &str) -> bool {
        self.ignored_methods
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(method))
    }
}
