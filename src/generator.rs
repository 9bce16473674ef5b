//! Document generation: the reduction from a route table to a Swagger document.
//!
//! One [`DocumentGenerator`] instance performs one single-threaded, single-pass
//! run over a pre-enumerated route list. The pass assembles base document
//! metadata, optionally emits security definitions, then visits every route in
//! registration order and every declared verb, accumulating operations into the
//! `paths` tree.
//!
//! Only an invalid configured auth flow aborts a run. Everything that can go
//! wrong for a single operation — an unregistered handler, a malformed doc
//! comment — degrades that operation to empty metadata and the run continues.

use crate::config::GeneratorConfig;
use crate::docblock::{self, DocBlock};
use crate::document::{Operation, Parameter, Response, SecurityRequirement, SwaggerDocument};
use crate::error::Result;
use crate::params::{
    body::BodyParameters, path::PathParameters, query::QueryParameters, ParamContext,
    ParameterGenerator,
};
use crate::route::Route;
use crate::rules::{HandlerRegistry, MergePolicy, RuleExtractor, RuleSet};
use crate::security::{self, MiddlewareAliases};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Generates one Swagger document from a route table.
pub struct DocumentGenerator<'a> {
    config: &'a GeneratorConfig,
    registry: &'a HandlerRegistry,
    aliases: &'a MiddlewareAliases,
    route_filter: Option<String>,
    merge_policy: MergePolicy,
}

impl<'a> DocumentGenerator<'a> {
    /// Create a generator for one run.
    pub fn new(
        config: &'a GeneratorConfig,
        registry: &'a HandlerRegistry,
        aliases: &'a MiddlewareAliases,
    ) -> Self {
        Self {
            config,
            registry,
            aliases,
            route_filter: None,
            merge_policy: MergePolicy::default(),
        }
    }

    /// Only document routes whose normalized URI starts with this literal prefix.
    pub fn with_route_filter(mut self, filter: impl Into<String>) -> Self {
        self.route_filter = Some(filter.into());
        self
    }

    /// Override the policy applied when a handler declares multiple rule sources.
    pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
        self.merge_policy = policy;
        self
    }

    /// Run the generation pass.
    ///
    /// Routes are visited in the order given; verbs in their declared order.
    ///
    /// # Errors
    ///
    /// Fails only on an invalid configured auth flow, before any path is built.
    pub fn generate(&self, routes: &[Route]) -> Result<SwaggerDocument> {
        debug!("Assembling base document info");
        let mut document = self.base_info();

        if self.config.parse_security {
            debug!(
                "Building security definitions for flow {}",
                self.config.auth_flow
            );
            let scheme = security::security_scheme(self.config)?;
            document.security_definitions = Some(BTreeMap::from([(
                self.config.security_definition.clone(),
                scheme,
            )]));
        }

        let extractor = RuleExtractor::new(self.registry, self.merge_policy);

        for route in routes {
            let uri = route.uri();

            if let Some(filter) = &self.route_filter {
                if !uri.starts_with(filter.as_str()) {
                    debug!("Skipping route outside filter prefix: {}", uri);
                    continue;
                }
            }

            let rules = extractor.extract(route.action());
            let doc_block = self.doc_block(&extractor, route.action());
            let security = document
                .security_definitions
                .is_some()
                .then(|| self.action_security(route))
                .filter(|requirements| !requirements.is_empty());

            for method in route.methods() {
                if self.config.is_ignored_method(&method) {
                    continue;
                }

                debug!("Documenting {} {}", method, uri);
                let operation =
                    self.operation(route, &method, &rules, &doc_block, security.clone());
                document
                    .paths
                    .entry(uri.clone())
                    .or_default()
                    .insert(method, operation);
            }
        }

        Ok(document)
    }

    /// Assemble the document skeleton from configuration.
    fn base_info(&self) -> SwaggerDocument {
        SwaggerDocument {
            swagger: "2.0".to_string(),
            info: crate::document::Info {
                title: self.config.title.clone(),
                description: self.config.description.clone(),
                version: self.config.app_version.clone(),
            },
            host: self.config.host.clone(),
            base_path: self.config.base_path.clone(),
            schemes: self.config.schemes.clone(),
            consumes: self.config.consumes.clone(),
            produces: self.config.produces.clone(),
            security_definitions: None,
            paths: BTreeMap::new(),
        }
    }

    /// Resolve the handler's doc block, degrading to empty metadata when parsing
    /// is disabled, no comment exists, or the parse fails.
    fn doc_block(&self, extractor: &RuleExtractor, action: &str) -> DocBlock {
        if !self.config.parse_doc_block {
            return DocBlock::default();
        }

        match extractor.doc_comment(action) {
            None => DocBlock::default(),
            Some(raw) => docblock::parse(raw).unwrap_or_else(|e| {
                warn!("Doc comment parse failed for {}: {}", action, e);
                DocBlock::default()
            }),
        }
    }

    /// Build the operation for one route and verb.
    fn operation(
        &self,
        route: &Route,
        method: &str,
        rules: &RuleSet,
        doc_block: &DocBlock,
        security: Option<Vec<SecurityRequirement>>,
    ) -> Operation {
        let original_uri = route.original_uri();
        let ctx = ParamContext {
            original_uri: &original_uri,
        };

        let mut parameters = PathParameters.generate(rules, &ctx);
        parameters.extend(self.rule_parameters(method, rules, &ctx));

        Operation {
            summary: doc_block.summary.clone(),
            description: doc_block.description.clone(),
            deprecated: doc_block.deprecated,
            parameters: (!parameters.is_empty()).then_some(parameters),
            responses: BTreeMap::from([("200".to_string(), Response::ok())]),
            security,
        }
    }

    /// Rule-set-derived parameters: body for mutating verbs, query otherwise.
    fn rule_parameters(
        &self,
        method: &str,
        rules: &RuleSet,
        ctx: &ParamContext,
    ) -> Vec<Parameter> {
        let generator: &dyn ParameterGenerator = match method {
            "post" | "put" | "patch" => &BodyParameters,
            _ => &QueryParameters,
        };
        generator.generate(rules, ctx)
    }

    /// One security requirement per middleware whose alias is a scope check,
    /// carrying the middleware's arguments as the demanded scopes.
    fn action_security(&self, route: &Route) -> Vec<SecurityRequirement> {
        route
            .middleware()
            .into_iter()
            .filter(|middleware| self.aliases.is_scope_check(&middleware.name))
            .map(|middleware| {
                BTreeMap::from([(
                    self.config.security_definition.clone(),
                    middleware.parameters,
                )])
            })
            .collect()
    }
}
