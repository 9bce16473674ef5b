use crate::document::{Parameter, Schema};
use crate::params::{enum_values, infer_type, is_required, ParamContext, ParameterGenerator};
use crate::rules::RuleSet;
use std::collections::BTreeMap;

/// Body parameter generator, used for mutating verbs.
///
/// Emits a single `in=body` parameter carrying an object schema with one property
/// per rule-set field, per the OpenAPI 2.0 body convention. An empty rule set
/// yields no parameter at all.
pub struct BodyParameters;

impl ParameterGenerator for BodyParameters {
    fn generate(&self, rules: &RuleSet, _ctx: &ParamContext) -> Vec<Parameter> {
        if rules.is_empty() {
            return Vec::new();
        }

        let mut properties = BTreeMap::new();
        let mut required = Vec::new();

        for (field, tokens) in rules {
            let field_type = infer_type(tokens).unwrap_or("string");

            let mut property = Schema::of_type(field_type);
            property.enum_values = enum_values(tokens);
            if field_type == "array" {
                property.items = Some(Box::new(Schema::of_type("string")));
            }
            properties.insert(field.clone(), property);

            if is_required(tokens) {
                required.push(field.clone());
            }
        }

        let schema = Schema {
            schema_type: Some("object".to_string()),
            properties: Some(properties),
            required: (!required.is_empty()).then_some(required),
            ..Schema::default()
        };

        vec![Parameter {
            name: "body".to_string(),
            location: "body".to_string(),
            schema: Some(schema),
            ..Parameter::default()
        }]
    }
}
