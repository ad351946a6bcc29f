use crate::types::Parameter;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a parameter list from its JSON form:
/// `[{"name": "...", "values": ["...", ...]}, ...]`.
pub fn parse_parameters(json: &str) -> Result<Vec<Parameter>, ParseError> {
    Ok(serde_json::from_str(json)?)
}
