use crate::document::Parameter;
use crate::params::{infer_type, ParamContext, ParameterGenerator};
use crate::rules::RuleSet;

/// Path parameter generator.
///
/// Derives descriptors from the `{param}`-style segments of the raw URI template,
/// optional markers included. Path parameters are always required; their type is
/// `string` unless a matching rule narrows it to `integer` or `number`.
pub struct PathParameters;

impl ParameterGenerator for PathParameters {
    fn generate(&self, rules: &RuleSet, ctx: &ParamContext) -> Vec<Parameter> {
        path_variables(ctx.original_uri)
            .into_iter()
            .map(|name| {
                let param_type = rules
                    .get(&name)
                    .and_then(|tokens| infer_type(tokens))
                    .filter(|t| matches!(*t, "integer" | "number"))
                    .unwrap_or("string");

                Parameter {
                    name,
                    location: "path".to_string(),
                    param_type: Some(param_type.to_string()),
                    required: Some(true),
                    ..Parameter::default()
                }
            })
            .collect()
    }
}

/// Extract variable names from a URI template, dropping any optional marker.
fn path_variables(uri: &str) -> Vec<String> {
    uri.split('/')
        .filter_map(|segment| {
            segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .map(|inner| inner.trim_end_matches('?').to_string())
        })
        .collect()
}
