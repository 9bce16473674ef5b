//! Route table adapter for normalizing native route records.
//!
//! The host framework exposes its route table as a flat list of records, each carrying
//! the raw URI template, the declared HTTP verbs, the bound handler identifier, an
//! optional middleware declaration and the registration group prefix. The [`Route`]
//! adapter wraps one such record and presents the normalized view the rest of the
//! pipeline works with: leading-slash URIs, lower-cased verbs and parsed middleware
//! references.

use serde::{Deserialize, Serialize};

/// One native route record as exposed by the host framework's route table.
///
/// This is a pure data value: it can be constructed in-process by a host application
/// or deserialized from an exported route manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Raw URI template, possibly without a leading slash and possibly carrying
    /// optional-segment markers (e.g. `users/{id?}`)
    pub uri: String,
    /// Declared HTTP verbs, in whatever casing the framework uses
    pub methods: Vec<String>,
    /// Middleware declaration; a single string or an array of strings.
    /// Absent when the route has no middleware attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middleware: Option<MiddlewareSpec>,
    /// Fully-qualified handler identifier (e.g. `App\Http\UserController@show`)
    pub action: String,
    /// Registration group prefix
    #[serde(default)]
    pub prefix: String,
}

/// A route's middleware declaration, which frameworks express either as one
/// raw string or as an array of raw strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MiddlewareSpec {
    /// A single raw middleware string
    One(String),
    /// An array of raw middleware strings
    Many(Vec<String>),
}

/// A parsed middleware reference: the alias plus any `:`-delimited arguments.
///
/// `scope:user-read,user-write` parses to name `scope` with parameters
/// `["user-read", "user-write"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddlewareRef {
    /// The middleware alias as registered with the framework
    pub name: String,
    /// Comma-split arguments following the first `:`, empty when none are given
    pub parameters: Vec<String>,
}

impl MiddlewareRef {
    /// Parse a raw middleware string of the form `name` or `name:p1,p2,...`.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((name, args)) => Self {
                name: name.to_string(),
                parameters: args
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
            None => Self {
                name: raw.trim().to_string(),
                parameters: Vec::new(),
            },
        }
    }
}

/// Adapter over one native route record.
///
/// Immutable once constructed; all accessors are pure reads of the wrapped record.
#[derive(Debug, Clone)]
pub struct Route {
    record: RouteRecord,
}

impl Route {
    /// Wrap a native route record.
    pub fn new(record: RouteRecord) -> Self {
        Self { record }
    }

    /// The raw URI template, normalized to carry a leading slash but with
    /// optional-segment markers (`{param?}`) kept intact.
    pub fn original_uri(&self) -> String {
        let uri = self.record.uri.trim();
        if uri.starts_with('/') {
            uri.to_string()
        } else {
            format!("/{}", uri)
        }
    }

    /// The URI used as the document's path key: leading-slash-normalized and with
    /// optional-segment markers stripped, so the documented path matches what
    /// clients actually send.
    pub fn uri(&self) -> String {
        let parts: Vec<String> = self
            .original_uri()
            .split('/')
            .map(|part| {
                if part.starts_with('{') && part.ends_with("?}") {
                    format!("{}}}", &part[..part.len() - 2])
                } else {
                    part.to_string()
                }
            })
            .collect();

        parts.join("/")
    }

    /// The route's declared HTTP verbs, lower-cased.
    pub fn methods(&self) -> Vec<String> {
        self.record
            .methods
            .iter()
            .map(|m| m.to_lowercase())
            .collect()
    }

    /// The fully-qualified handler identifier.
    pub fn action(&self) -> &str {
        &self.record.action
    }

    /// The parsed middleware list.
    ///
    /// Array-valued declarations are expanded into their elements. Returns an empty
    /// list when the record carries no middleware key.
    pub fn middleware(&self) -> Vec<MiddlewareRef> {
        match &self.record.middleware {
            None => Vec::new(),
            Some(MiddlewareSpec::One(raw)) => vec![MiddlewareRef::parse(raw)],
            Some(MiddlewareSpec::Many(raws)) => {
                raws.iter().map(|raw| MiddlewareRef::parse(raw)).collect()
            }
        }
    }

    /// The route's registered group prefix. Contextual metadata only; not emitted
    /// into the generated document.
    pub fn group(&self) -> &str {
        &self.record.prefix
    }
}
