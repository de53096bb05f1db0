use serde::Deserialize;

use crate::api::errors::ApiError;

/// Raw query string pairs, for endpoints that accept repeated keys
/// (`?surface=Clay&surface=Grass`).
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// First value given for `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every non-empty value given for `key`, in request order.
    pub fn all(&self, key: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(k, v)| k == key && !v.is_empty())
            .map(|(_, v)| v.clone())
            .collect()
    }
}

impl From<Vec<(String, String)>> for QueryPairs {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

/// Treats an empty value the same as a missing one.
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn required(value: Option<&str>, message: &str) -> Result<String, ApiError> {
    optional(value).ok_or_else(|| ApiError::bad_request(message))
}

/// Integer parameter with a default when absent; garbage is a bad request.
pub fn parse_int_or(value: Option<&str>, default: i32, name: &str) -> Result<i32, ApiError> {
    match optional(value) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::bad_request(format!("Invalid '{name}' parameter"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_repeated_keys_are_collected() {
        let query = pairs(&[("surface", "Clay"), ("level", "G"), ("surface", "Grass"), ("surface", "")]);

        assert_eq!(query.all("surface"), vec!["Clay", "Grass"]);
        assert_eq!(query.all("level"), vec!["G"]);
        assert!(query.all("round").is_empty());
        assert_eq!(query.first("surface"), Some("Clay"));
    }

    #[test]
    fn test_empty_required_value_is_rejected() {
        assert!(matches!(required(Some(""), "missing"), Err(ApiError::BadRequest(_))));
        assert!(matches!(required(None, "missing"), Err(ApiError::BadRequest(_))));
        assert_eq!(required(Some(" C044 "), "missing").unwrap(), "C044");
    }

    #[test]
    fn test_int_parameter_defaults_and_validates() {
        assert_eq!(parse_int_or(None, 2, "top").unwrap(), 2);
        assert_eq!(parse_int_or(Some("5"), 2, "top").unwrap(), 5);
        assert!(matches!(parse_int_or(Some("five"), 2, "top"), Err(ApiError::BadRequest(_))));
    }
}
