use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// Key used for errors that are not tied to a single field.
pub const CUSTOM_ERROR_KEY: &str = "CustomError";

/// Accumulated per-field validation errors for a single request.
///
/// Serializes as a plain map of `field -> [messages]`, which is the
/// `errors` member of a 400 validation response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelState(BTreeMap<String, Vec<String>>);

impl ModelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_error(key: impl Into<String>, message: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.add_error(key, message);
        state
    }

    pub fn add_error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(message.into());
    }

    pub fn merge(&mut self, other: ModelState) {
        for (key, messages) in other.0 {
            self.0.entry(key).or_default().extend(messages);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<ValidationErrors> for ModelState {
    fn from(errors: ValidationErrors) -> Self {
        let mut state = ModelState::new();
        for (field, errs) in errors.field_errors() {
            let key = camel_case(&field.to_string());
            for err in errs.iter() {
                let message = match &err.message {
                    Some(m) => m.to_string(),
                    None => format!("The field {} is invalid ({}).", key, err.code),
                };
                state.add_error(key.clone(), message);
            }
        }
        state
    }
}

/// Field names on the wire are camelCase; validator reports Rust idents.
fn camel_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    let mut upper = false;
    for c in ident.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_messages_per_key() {
        let mut state = ModelState::new();
        assert!(state.is_valid());
        state.add_error("name", "too long");
        state.add_error("name", "required");
        state.add_error(CUSTOM_ERROR_KEY, "Villa Already Exists");
        assert!(!state.is_valid());
        assert_eq!(state.errors("name"), ["too long", "required"]);
        assert_eq!(state.keys().collect::<Vec<_>>(), vec![CUSTOM_ERROR_KEY, "name"]);
        assert!(state.errors("rate").is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let state = ModelState::with_error(CUSTOM_ERROR_KEY, "Villa Already Exists");
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({"CustomError": ["Villa Already Exists"]})
        );
    }

    #[test]
    fn camel_cases_field_idents() {
        assert_eq!(camel_case("image_url"), "imageUrl");
        assert_eq!(camel_case("name"), "name");
        assert_eq!(camel_case("imageUrl"), "imageUrl");
    }
}
