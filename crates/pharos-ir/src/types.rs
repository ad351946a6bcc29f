use serde::{Deserialize, Serialize};

/// A named configuration dimension and its ordered domain of values.
///
/// Order is part of the input contract, not an implementation detail:
/// parameter order drives scoring and tie-breaking in the generator, and
/// domain order decides which value wins a score tie. Reordering either
/// changes the output suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub values: Vec<String>,
}

impl Parameter {
    pub fn new(name: &str, values: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}
