//! Validation-rule extraction for route handlers.
//!
//! The host framework can attach a declared input-validation object to a handler by
//! typing one of the handler's parameters as a "form request": a class exposing a
//! rule set mapping field names to ordered constraint tokens. Without runtime
//! reflection, that convention becomes an explicit capability: validation objects
//! implement [`RuleProvider`], and handler signatures are registered ahead of a run
//! in a [`HandlerRegistry`] keyed by handler identifier.
//!
//! Resolution never fails hard: a handler identifier that is not registered (for
//! example a route bound to an inline closure) simply yields an empty rule set.

use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// A rule set: field name mapped to its ordered list of constraint tokens.
///
/// Each token is a bare constraint name (`required`, `string`, `integer`) or a
/// name carrying `:`-delimited arguments (`exists:users,id`, `in:a,b,c`). A field
/// absent from the map has no declared constraints.
pub type RuleSet = BTreeMap<String, Vec<String>>;

/// Capability implemented by every validation object the extractor can read.
pub trait RuleProvider: Send + Sync {
    /// Enumerate the declared field-to-constraint-token rules.
    fn rules(&self) -> RuleSet;
}

/// A data-backed [`RuleProvider`] holding a fixed rule set.
///
/// Used when rule sets arrive as plain data (manifest loading, tests) rather than
/// as live validation objects.
#[derive(Debug, Clone, Default)]
pub struct StaticRules {
    rules: RuleSet,
}

impl StaticRules {
    /// Wrap a fixed rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl RuleProvider for StaticRules {
    fn rules(&self) -> RuleSet {
        self.rules.clone()
    }
}

/// One declared parameter of a handler method.
#[derive(Clone)]
pub enum ParamBinding {
    /// A parameter with a builtin (non-class) declared type; skipped by extraction
    Builtin(String),
    /// A parameter whose declared type is a recognized form-validation object
    FormRequest(Arc<dyn RuleProvider>),
}

impl std::fmt::Debug for ParamBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParamBinding::Builtin(ty) => write!(f, "Builtin({})", ty),
            ParamBinding::FormRequest(_) => write!(f, "FormRequest(..)"),
        }
    }
}

/// Everything the registry knows about one handler: its raw doc comment and its
/// declared parameter list.
#[derive(Debug, Clone, Default)]
pub struct HandlerMeta {
    /// The handler's raw doc comment text, if any
    pub doc_comment: Option<String>,
    /// The handler's declared parameters, in declaration order
    pub params: Vec<ParamBinding>,
}

/// Registry mapping handler identifiers to their metadata.
///
/// Stands in for the host framework's reflection surface: resolving an identifier
/// returns the handler's parameter list and doc comment, or nothing when the
/// identifier does not name a reflectable target.
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, HandlerMeta>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata for a handler identifier.
    pub fn register(&mut self, action: impl Into<String>, meta: HandlerMeta) {
        self.handlers.insert(action.into(), meta);
    }

    /// Resolve a handler identifier. Returns `None` for unregistered identifiers.
    pub fn resolve(&self, action: &str) -> Option<&HandlerMeta> {
        self.handlers.get(action)
    }
}

/// Policy applied when a handler declares more than one form-request parameter.
///
/// The host framework's original behavior keeps only the last matching
/// parameter's rules, so [`MergePolicy::LastWins`] is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Keep only the last form-request parameter's rules
    #[default]
    LastWins,
    /// Keep only the first form-request parameter's rules
    FirstWins,
    /// Merge all form-request parameters' rules; later fields overwrite earlier ones
    MergeAll,
}

/// Extracts rule sets and doc comments from registered handlers.
pub struct RuleExtractor<'a> {
    registry: &'a HandlerRegistry,
    policy: MergePolicy,
}

impl<'a> RuleExtractor<'a> {
    /// Create an extractor over a registry with the given merge policy.
    pub fn new(registry: &'a HandlerRegistry, policy: MergePolicy) -> Self {
        Self { registry, policy }
    }

    /// Extract the rule set declared for a handler.
    ///
    /// Scans the handler's parameter list in declaration order, skipping
    /// builtin-typed parameters, and combines form-request rule sets per the
    /// configured [`MergePolicy`]. Unresolvable handlers yield an empty rule set.
    pub fn extract(&self, action: &str) -> RuleSet {
        let meta = match self.registry.resolve(action) {
            Some(meta) => meta,
            None => {
                debug!("Handler not registered, no rules: {}", action);
                return RuleSet::new();
            }
        };

        let mut combined = RuleSet::new();
        for param in &meta.params {
            let provider = match param {
                ParamBinding::Builtin(_) => continue,
                ParamBinding::FormRequest(provider) => provider,
            };

            match self.policy {
                MergePolicy::LastWins => {
                    combined = provider.rules();
                }
                MergePolicy::FirstWins => {
                    combined = provider.rules();
                    break;
                }
                MergePolicy::MergeAll => {
                    combined.extend(provider.rules());
                }
            }
        }

        combined
    }

    /// The handler's raw doc comment, if it is registered and carries one.
    pub fn doc_comment(&self, action: &str) -> Option<&str> {
        self.registry
            .resolve(action)?
            .doc_comment
            .as_deref()
    }
}
