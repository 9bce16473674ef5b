//! Route manifest loading.
//!
//! A manifest is an exported snapshot of the host framework's metadata surface:
//! the route table, per-handler doc comments and rule sets, the middleware-alias
//! map and the generator configuration. It is what the command-line tool consumes
//! in place of a live framework; host applications embedding the library build
//! the same values in-process instead.

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::route::{Route, RouteRecord};
use crate::rules::{HandlerMeta, HandlerRegistry, ParamBinding, RuleSet, StaticRules};
use crate::security::MiddlewareAliases;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// An exported route-table snapshot plus generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Generator configuration; defaults apply for omitted keys
    #[serde(default)]
    pub config: GeneratorConfig,
    /// The route table, in registration order
    pub routes: Vec<RouteRecord>,
    /// Handler metadata keyed by handler identifier
    #[serde(default)]
    pub handlers: BTreeMap<String, HandlerManifest>,
    /// Middleware alias map
    #[serde(default)]
    pub middleware_aliases: MiddlewareAliases,
}

/// Exported metadata for one handler.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HandlerManifest {
    /// The handler's raw doc comment, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,
    /// The handler's declared validation rules
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: RuleSet,
}

impl Manifest {
    /// Load a manifest from a JSON or YAML file, chosen by extension
    /// (`.json` is JSON; anything else is read as YAML).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not deserialize.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading route manifest: {}", path.display());
        let content = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let manifest = if is_json {
            serde_json::from_str(&content).map_err(|e| Error::ManifestError {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| Error::ManifestError {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        debug!("Manifest loaded: {}", path.display());
        Ok(manifest)
    }

    /// The route table as adapter values, in manifest order.
    pub fn routes(&self) -> Vec<Route> {
        self.routes.iter().cloned().map(Route::new).collect()
    }

    /// Materialize the handler registry.
    ///
    /// Each handler's exported rule set becomes a single form-request parameter
    /// backed by [`StaticRules`]; handlers without rules register with an empty
    /// parameter list.
    pub fn handler_registry(&self) -> HandlerRegistry {
        let mut registry = HandlerRegistry::new();

        for (action, handler) in &self.handlers {
            let params = if handler.rules.is_empty() {
                Vec::new()
            } else {
                vec![ParamBinding::FormRequest(Arc::new(StaticRules::new(
                    handler.rules.clone(),
                )))]
            };

            registry.register(
                action.clone(),
                HandlerMeta {
                    doc_comment: handler.doc_comment.clone(),
                    params,
                },
            );
        }

        registry
    }
}
