//! Security definitions and middleware-alias classification.
//!
//! The host framework registers middleware under short aliases. For documentation
//! purposes the only question this system ever asks of an alias is whether it
//! resolves to a scope-checking middleware; the answer comes from an explicit
//! [`MiddlewareAliases`] map handed to the generator at construction, scoped to
//! one run.

use crate::config::GeneratorConfig;
use crate::document::SecurityScheme;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What an alias resolves to, as far as documentation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MiddlewareKind {
    /// A middleware enforcing OAuth2-style permission scopes
    ScopeCheck,
    /// Anything else
    Other,
}

/// Alias-to-kind map standing in for the framework's middleware-alias registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MiddlewareAliases {
    aliases: BTreeMap<String, MiddlewareKind>,
}

impl MiddlewareAliases {
    /// Create an empty alias map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an alias.
    pub fn insert(&mut self, alias: impl Into<String>, kind: MiddlewareKind) {
        self.aliases.insert(alias.into(), kind);
    }

    /// Whether an alias resolves to a scope-checking middleware.
    /// Unregistered aliases do not.
    pub fn is_scope_check(&self, alias: &str) -> bool {
        self.aliases.get(alias) == Some(&MiddlewareKind::ScopeCheck)
    }
}

/// Build the single named security scheme for the configured auth flow.
///
/// # Errors
///
/// Returns [`crate::error::Error::InvalidAuthFlow`] when the configured flow is
/// not a member of the allowed set.
pub fn security_scheme(config: &GeneratorConfig) -> Result<SecurityScheme> {
    config.validate_auth_flow()?;

    if config.auth_flow == "apiKey" {
        return Ok(SecurityScheme {
            scheme_type: "apiKey".to_string(),
            name: Some("Authorization".to_string()),
            location: Some("header".to_string()),
            ..SecurityScheme::default()
        });
    }

    let mut scheme = SecurityScheme {
        scheme_type: "oauth2".to_string(),
        flow: Some(config.auth_flow.clone()),
        scopes: Some(oauth_scopes()),
        ..SecurityScheme::default()
    };

    if matches!(config.auth_flow.as_str(), "implicit" | "accessCode") {
        scheme.authorization_url = Some(config.authorization_url.clone());
    }
    if matches!(
        config.auth_flow.as_str(),
        "password" | "application" | "accessCode"
    ) {
        scheme.token_url = Some(config.token_url.clone());
    }

    Ok(scheme)
}

/// Scope name to description mapping for the emitted scheme.
///
/// Extension point: surfacing real scope descriptions from the host auth system
/// is unresolved, so this yields an empty mapping.
pub fn oauth_scopes() -> BTreeMap<String, String> {
    BTreeMap::new()
}
