use pretty_assertions::assert_eq;
use serde_json::json;
use swagger_from_routes::{
    config::GeneratorConfig,
    generator::DocumentGenerator,
    manifest::Manifest,
    route::{Route, RouteRecord},
    rules::HandlerRegistry,
    security::MiddlewareAliases,
    serializer::{serialize_json, serialize_yaml},
};
use tempfile::TempDir;

/// Helper function to write the fixture manifest into a temporary directory
/// and load it back the way the CLI would
fn load_fixture() -> Manifest {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("routes.yaml");
    std::fs::write(&path, include_str!("fixtures/petshop_manifest.yaml"))
        .expect("Failed to write fixture manifest");

    Manifest::load(&path).expect("Failed to load fixture manifest")
}

#[test]
fn test_end_to_end_document_structure() {
    let manifest = load_fixture();
    let registry = manifest.handler_registry();
    let routes = manifest.routes();

    let generator =
        DocumentGenerator::new(&manifest.config, &registry, &manifest.middleware_aliases);
    let document = generator.generate(&routes).expect("Generation failed");

    // Base info comes straight from the manifest config
    assert_eq!(document.swagger, "2.0");
    assert_eq!(document.info.title, "Petshop API");
    assert_eq!(document.info.version, "1.2.0");
    assert_eq!(document.host, "petshop.test");
    assert_eq!(document.schemes, vec!["https"]);

    // One path per distinct normalized URI, one key per non-ignored verb
    assert_eq!(document.paths.len(), 4);
    assert!(document.paths.contains_key("/pets"));
    assert!(document.paths.contains_key("/pets/{id}"));
    assert!(document.paths.contains_key("/pets/{id}/photos/{photo}"));
    assert!(document.paths.contains_key("/admin/metrics"));

    let pets = &document.paths["/pets"];
    assert_eq!(pets.len(), 2, "HEAD must be ignored on /pets");
    assert!(pets.contains_key("get"));
    assert!(pets.contains_key("post"));

    // Security definitions were requested by the fixture config
    let definitions = document.security_definitions.as_ref().unwrap();
    let scheme = &definitions["OAuth2"];
    assert_eq!(scheme.scheme_type, "oauth2");
    assert_eq!(scheme.flow.as_deref(), Some("accessCode"));
    assert_eq!(scheme.scopes.as_ref().map(|s| s.len()), Some(0));
}

#[test]
fn test_doc_comments_fill_summaries() {
    let manifest = load_fixture();
    let registry = manifest.handler_registry();
    let routes = manifest.routes();

    let document =
        DocumentGenerator::new(&manifest.config, &registry, &manifest.middleware_aliases)
            .generate(&routes)
            .unwrap();

    let list = &document.paths["/pets"]["get"];
    assert_eq!(list.summary, "List pets.");
    assert_eq!(
        list.description,
        "Returns all pets, filtered by the optional query constraints."
    );
    assert!(!list.deprecated);

    let store = &document.paths["/pets"]["post"];
    assert_eq!(store.summary, "Register a new pet.");
    assert!(store.deprecated);

    // No doc comment registered for the metrics handler
    let metrics = &document.paths["/admin/metrics"]["get"];
    assert_eq!(metrics.summary, "");
    assert_eq!(metrics.description, "");
    assert!(!metrics.deprecated);
}

#[test]
fn test_get_rules_emit_query_parameters() {
    let manifest = load_fixture();
    let registry = manifest.handler_registry();
    let routes = manifest.routes();

    let document =
        DocumentGenerator::new(&manifest.config, &registry, &manifest.middleware_aliases)
            .generate(&routes)
            .unwrap();

    let parameters = document.paths["/pets"]["get"].parameters.as_ref().unwrap();
    assert_eq!(parameters.len(), 2);
    assert!(parameters.iter().all(|p| p.location == "query"));

    let limit = parameters.iter().find(|p| p.name == "limit").unwrap();
    assert_eq!(limit.param_type.as_deref(), Some("integer"));
    assert_eq!(limit.required, Some(false));
}

#[test]
fn test_post_rules_emit_a_single_body_parameter() {
    let manifest = load_fixture();
    let registry = manifest.handler_registry();
    let routes = manifest.routes();

    let document =
        DocumentGenerator::new(&manifest.config, &registry, &manifest.middleware_aliases)
            .generate(&routes)
            .unwrap();

    let parameters = document.paths["/pets"]["post"].parameters.as_ref().unwrap();
    assert_eq!(parameters.len(), 1);
    assert_eq!(parameters[0].name, "body");
    assert_eq!(parameters[0].location, "body");

    let schema = parameters[0].schema.as_ref().unwrap();
    assert_eq!(schema.schema_type.as_deref(), Some("object"));
    assert_eq!(
        schema.required,
        Some(vec![
            "age".to_string(),
            "name".to_string(),
            "size".to_string()
        ])
    );

    let properties = schema.properties.as_ref().unwrap();
    assert_eq!(properties["age"].schema_type.as_deref(), Some("integer"));
    assert_eq!(properties["tags"].schema_type.as_deref(), Some("array"));
    assert_eq!(
        properties["size"].enum_values,
        Some(vec![
            "small".to_string(),
            "medium".to_string(),
            "large".to_string()
        ])
    );
}

#[test]
fn test_path_parameters_are_typed_from_rules_and_required() {
    let manifest = load_fixture();
    let registry = manifest.handler_registry();
    let routes = manifest.routes();

    let document =
        DocumentGenerator::new(&manifest.config, &registry, &manifest.middleware_aliases)
            .generate(&routes)
            .unwrap();

    let parameters = document.paths["/pets/{id}"]["get"].parameters.as_ref().unwrap();
    let id = parameters.iter().find(|p| p.name == "id").unwrap();

    assert_eq!(id.location, "path");
    assert_eq!(id.required, Some(true));
    // The show handler declares id as integer, which narrows the path type
    assert_eq!(id.param_type.as_deref(), Some("integer"));
}

#[test]
fn test_optional_path_segment_is_documented_without_marker() {
    let manifest = load_fixture();
    let registry = manifest.handler_registry();
    let routes = manifest.routes();

    let document =
        DocumentGenerator::new(&manifest.config, &registry, &manifest.middleware_aliases)
            .generate(&routes)
            .unwrap();

    let parameters = document.paths["/pets/{id}/photos/{photo}"]["get"]
        .parameters
        .as_ref()
        .unwrap();
    let names: Vec<_> = parameters.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["id", "photo"]);
    assert!(parameters.iter().all(|p| p.required == Some(true)));
}

#[test]
fn test_scope_middleware_yields_security_requirements() {
    let manifest = load_fixture();
    let registry = manifest.handler_registry();
    let routes = manifest.routes();

    let document =
        DocumentGenerator::new(&manifest.config, &registry, &manifest.middleware_aliases)
            .generate(&routes)
            .unwrap();

    let show_security = document.paths["/pets/{id}"]["get"].security.as_ref().unwrap();
    assert_eq!(show_security.len(), 1);
    assert_eq!(show_security[0]["OAuth2"], vec!["pet-read".to_string()]);

    let store_security = document.paths["/pets"]["post"].security.as_ref().unwrap();
    assert_eq!(store_security[0]["OAuth2"], vec!["pet-write".to_string()]);

    // auth/api alias to non-scope middleware and must not produce requirements
    assert!(document.paths["/admin/metrics"]["get"].security.is_none());
}

#[test]
fn test_route_filter_limits_documented_paths() {
    let manifest = load_fixture();
    let registry = manifest.handler_registry();
    let routes = manifest.routes();

    let document =
        DocumentGenerator::new(&manifest.config, &registry, &manifest.middleware_aliases)
            .with_route_filter("/pets")
            .generate(&routes)
            .unwrap();

    assert_eq!(document.paths.len(), 3);
    assert!(!document.paths.contains_key("/admin/metrics"));
}

#[test]
fn test_repeated_runs_serialize_byte_identically() {
    let first_manifest = load_fixture();
    let first_registry = first_manifest.handler_registry();
    let first = DocumentGenerator::new(
        &first_manifest.config,
        &first_registry,
        &first_manifest.middleware_aliases,
    )
    .generate(&first_manifest.routes())
    .unwrap();

    let second_manifest = load_fixture();
    let second_registry = second_manifest.handler_registry();
    let second = DocumentGenerator::new(
        &second_manifest.config,
        &second_registry,
        &second_manifest.middleware_aliases,
    )
    .generate(&second_manifest.routes())
    .unwrap();

    assert_eq!(
        serialize_yaml(&first).unwrap(),
        serialize_yaml(&second).unwrap()
    );
    assert_eq!(
        serialize_json(&first).unwrap(),
        serialize_json(&second).unwrap()
    );
}

#[test]
fn test_plain_get_route_matches_expected_operation_shape() {
    let config = GeneratorConfig {
        parse_security: false,
        parse_doc_block: false,
        ..GeneratorConfig::default()
    };
    let registry = HandlerRegistry::new();
    let aliases = MiddlewareAliases::new();

    let routes = vec![Route::new(RouteRecord {
        uri: "/users/{id}".to_string(),
        methods: vec!["GET".to_string()],
        middleware: None,
        action: "App\\UserController@show".to_string(),
        prefix: String::new(),
    })];

    let document = DocumentGenerator::new(&config, &registry, &aliases)
        .generate(&routes)
        .unwrap();

    let operation = serde_json::to_value(&document.paths["/users/{id}"]["get"]).unwrap();
    assert_eq!(
        operation,
        json!({
            "summary": "",
            "description": "",
            "deprecated": false,
            "parameters": [
                {"name": "id", "in": "path", "type": "string", "required": true}
            ],
            "responses": {"200": {"description": "OK"}}
        })
    );
}

#[test]
fn test_serialized_yaml_contains_documented_paths() {
    let manifest = load_fixture();
    let registry = manifest.handler_registry();

    let document =
        DocumentGenerator::new(&manifest.config, &registry, &manifest.middleware_aliases)
            .generate(&manifest.routes())
            .unwrap();

    let yaml = serialize_yaml(&document).unwrap();
    assert!(yaml.contains("swagger: '2.0'"));
    assert!(yaml.contains("/pets:"));
    assert!(yaml.contains("securityDefinitions:"));

    let json = serialize_json(&document).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed["paths"]["/pets"]["get"].is_object());
    assert_eq!(parsed["swagger"], "2.0");
}
