use std::collections::HashSet;

use crate::types::Parameter;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no parameters given")]
    NoParameters,

    #[error("parameter '{parameter}' has an empty domain")]
    EmptyDomain { parameter: String },

    #[error("duplicate parameter name '{parameter}'")]
    DuplicateParameter { parameter: String },

    #[error("parameter '{parameter}' lists value '{value}' more than once")]
    DuplicateValue { parameter: String, value: String },
}

/// Check the input contract: at least one parameter, unique parameter
/// names, non-empty domains of distinct values.
///
/// Everything downstream assumes a validated parameter list; the generator
/// calls this before building anything.
pub fn validate_parameters(parameters: &[Parameter]) -> Result<(), ConfigError> {
    if parameters.is_empty() {
        return Err(ConfigError::NoParameters);
    }

    let mut names = HashSet::new();
    for param in parameters {
        if !names.insert(param.name.as_str()) {
            return Err(ConfigError::DuplicateParameter {
                parameter: param.name.clone(),
            });
        }
        if param.values.is_empty() {
            return Err(ConfigError::EmptyDomain {
                parameter: param.name.clone(),
            });
        }
        let mut values = HashSet::new();
        for value in &param.values {
            if !values.insert(value.as_str()) {
                return Err(ConfigError::DuplicateValue {
                    parameter: param.name.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    Ok(())
}
