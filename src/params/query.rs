use crate::document::{Parameter, Schema};
use crate::params::{enum_values, infer_type, is_required, ParamContext, ParameterGenerator};
use crate::rules::RuleSet;

/// Query parameter generator, used for read-style verbs.
///
/// Every rule-set field becomes one top-level `in=query` descriptor. The type is
/// inferred from the field's constraint tokens and defaults to `string`;
/// array-typed fields carry a string item schema.
pub struct QueryParameters;

impl ParameterGenerator for QueryParameters {
    fn generate(&self, rules: &RuleSet, _ctx: &ParamContext) -> Vec<Parameter> {
        rules
            .iter()
            .map(|(field, tokens)| {
                let param_type = infer_type(tokens).unwrap_or("string");

                Parameter {
                    name: field.clone(),
                    location: "query".to_string(),
                    param_type: Some(param_type.to_string()),
                    required: Some(is_required(tokens)),
                    enum_values: enum_values(tokens),
                    items: (param_type == "array").then(|| Schema::of_type("string")),
                    ..Parameter::default()
                }
            })
            .collect()
    }
}
