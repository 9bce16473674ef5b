//! Swagger From Routes - Automatic OpenAPI 2.0 documentation from route tables.
//!
//! This library generates a Swagger document by inspecting the metadata a web
//! framework already holds about its registered routes: URI templates, HTTP
//! verbs, handler doc comments, declared validation rules and attached
//! middleware. Nothing needs to be hand-authored; the framework's own route
//! table is the single source of truth.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`route`] - Adapts native route records (URIs, verbs, middleware, handler ids)
//! 2. [`rules`] - Resolves handlers to their declared validation rule sets
//! 3. [`docblock`] - Parses handler doc comments into summary/description/deprecated
//! 4. [`params`] - Turns rule sets and URI templates into parameter descriptors
//! 5. [`security`] - Builds security schemes and classifies middleware aliases
//! 6. [`generator`] - Reduces the route table into the final document tree
//! 7. [`document`] - The serializable OpenAPI 2.0 document model
//! 8. [`manifest`] - Loads exported route-table snapshots for CLI use
//! 9. [`serializer`] - Serializes the document to YAML or JSON
//!
//! # Example Usage
//!
//! ```
//! use swagger_from_routes::{
//!     config::GeneratorConfig,
//!     generator::DocumentGenerator,
//!     route::{Route, RouteRecord},
//!     rules::HandlerRegistry,
//!     security::MiddlewareAliases,
//!     serializer::serialize_yaml,
//! };
//!
//! let routes = vec![Route::new(RouteRecord {
//!     uri: "/users/{id}".to_string(),
//!     methods: vec!["GET".to_string()],
//!     middleware: None,
//!     action: "App\\UserController@show".to_string(),
//!     prefix: String::new(),
//! })];
//!
//! let config = GeneratorConfig::default();
//! let registry = HandlerRegistry::new();
//! let aliases = MiddlewareAliases::new();
//!
//! let generator = DocumentGenerator::new(&config, &registry, &aliases);
//! let document = generator.generate(&routes).unwrap();
//!
//! let yaml = serialize_yaml(&document).unwrap();
//! println!("{}", yaml);
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage over an exported route manifest, see the [`cli`]
//! module which provides a complete CLI application.

pub mod cli;
pub mod config;
pub mod docblock;
pub mod document;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod params;
pub mod route;
pub mod rules;
pub mod security;
pub mod serializer;
