//! RFC 6902 JSON patch applied to a typed, flat transfer object.
//!
//! Operations run in order against the serialized form of the target. An
//! operation that fails is recorded in the returned [`ModelState`] under its
//! path and skipped; the remaining operations still run so that every
//! problem is reported at once. Only a patch with no errors yields a value.
//!
//! `remove` on a property resets it to the zero value of its JSON type
//! (`""`, `0`, `false`), since properties of a typed object cannot vanish.

use common::ModelState;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

impl PatchOperation {
    pub fn path(&self) -> &str {
        match self {
            PatchOperation::Add { path, .. }
            | PatchOperation::Remove { path }
            | PatchOperation::Replace { path, .. }
            | PatchOperation::Move { path, .. }
            | PatchOperation::Copy { path, .. }
            | PatchOperation::Test { path, .. } => path,
        }
    }
}

/// A JSON patch document: a JSON array of operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonPatch(pub Vec<PatchOperation>);

impl JsonPatch {
    /// True if any operation writes to `property` (matched case-insensitively).
    /// A `move` also writes to its source, which it resets.
    pub fn touches(&self, property: &str) -> bool {
        let names = |pointer: &str| {
            pointer
                .strip_prefix('/')
                .is_some_and(|p| p.eq_ignore_ascii_case(property))
        };
        self.0.iter().any(|op| match op {
            PatchOperation::Test { .. } => false,
            PatchOperation::Move { from, path } => names(from) || names(path),
            other => names(other.path()),
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("The path '{0}' is not a valid JSON pointer.")]
    InvalidPointer(String),
    #[error("The target location specified by path '{0}' was not found.")]
    UnknownPath(String),
    #[error("The current value at path '{0}' is not equal to the test value.")]
    TestFailed(String),
    #[error("The value for '{0}' is invalid for the target location.")]
    InvalidValue(String),
    #[error("The target object could not be serialized: {0}")]
    Target(String),
}

/// Apply `patch` to a copy of `target`. `target` itself is never modified.
pub fn apply_to<T>(patch: &JsonPatch, target: &T) -> Result<T, ModelState>
where
    T: Serialize + DeserializeOwned,
{
    let mut doc = serde_json::to_value(target)
        .map_err(|e| ModelState::with_error("", PatchError::Target(e.to_string()).to_string()))?;
    let mut state = ModelState::new();

    for op in &patch.0 {
        let mut candidate = doc.clone();
        let outcome = apply_operation(&mut candidate, op).and_then(|()| {
            serde_json::from_value::<T>(candidate.clone())
                .map(|_| ())
                .map_err(|_| PatchError::InvalidValue(op.path().to_string()))
        });
        match outcome {
            Ok(()) => doc = candidate,
            Err(e) => state.add_error(op.path(), e.to_string()),
        }
    }

    if !state.is_valid() {
        return Err(state);
    }
    serde_json::from_value(doc)
        .map_err(|e| ModelState::with_error("", PatchError::Target(e.to_string()).to_string()))
}

fn apply_operation(doc: &mut Value, op: &PatchOperation) -> Result<(), PatchError> {
    let obj = doc
        .as_object_mut()
        .ok_or_else(|| PatchError::UnknownPath(op.path().to_string()))?;
    match op {
        PatchOperation::Add { path, value } | PatchOperation::Replace { path, value } => {
            let key = resolve(obj, path)?;
            obj.insert(key, value.clone());
        }
        PatchOperation::Remove { path } => {
            let key = resolve(obj, path)?;
            reset(obj, &key);
        }
        PatchOperation::Move { from, path } => {
            let src = resolve(obj, from)?;
            let dst = resolve(obj, path)?;
            if src != dst {
                let value = obj.get(&src).cloned().unwrap_or(Value::Null);
                reset(obj, &src);
                obj.insert(dst, value);
            }
        }
        PatchOperation::Copy { from, path } => {
            let src = resolve(obj, from)?;
            let dst = resolve(obj, path)?;
            let value = obj.get(&src).cloned().unwrap_or(Value::Null);
            obj.insert(dst, value);
        }
        PatchOperation::Test { path, value } => {
            let key = resolve(obj, path)?;
            if !json_eq(obj.get(&key).unwrap_or(&Value::Null), value) {
                return Err(PatchError::TestFailed(path.clone()));
            }
        }
    }
    Ok(())
}

/// Map a single-segment pointer onto an existing property name.
fn resolve(obj: &Map<String, Value>, pointer: &str) -> Result<String, PatchError> {
    let raw = pointer
        .strip_prefix('/')
        .ok_or_else(|| PatchError::InvalidPointer(pointer.to_string()))?;
    if raw.is_empty() || raw.contains('/') {
        return Err(PatchError::UnknownPath(pointer.to_string()));
    }
    let segment = raw.replace("~1", "/").replace("~0", "~");
    obj.keys()
        .find(|k| k.eq_ignore_ascii_case(&segment))
        .cloned()
        .ok_or_else(|| PatchError::UnknownPath(pointer.to_string()))
}

fn reset(obj: &mut Map<String, Value>, key: &str) {
    if let Some(slot) = obj.get_mut(key) {
        let zero = match slot {
            Value::String(_) => Value::String(String::new()),
            Value::Number(_) => Value::from(0),
            Value::Bool(_) => Value::Bool(false),
            Value::Array(_) => Value::Array(Vec::new()),
            Value::Object(_) | Value::Null => Value::Null,
        };
        *slot = zero;
    }
}

/// Numeric equality ignores integer/float representation (`4` == `4.0`).
fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::VillaUpdateDto;
    use serde_json::json;

    fn villa() -> VillaUpdateDto {
        VillaUpdateDto {
            id: 1,
            name: "Royal Villa".into(),
            details: "Sea view".into(),
            rate: 200.0,
            occupancy: 4,
            sqft: 550,
            image_url: "https://img.example.com/royal.jpg".into(),
            amenity: "Pool".into(),
        }
    }

    fn patch(ops: Value) -> JsonPatch {
        serde_json::from_value(ops).unwrap()
    }

    #[test]
    fn parses_rfc6902_document() {
        let p = patch(json!([
            {"op": "replace", "path": "/name", "value": "X"},
            {"op": "move", "from": "/details", "path": "/amenity"},
            {"op": "remove", "path": "/details"}
        ]));
        assert_eq!(p.0.len(), 3);
        assert_eq!(p.0[1], PatchOperation::Move { from: "/details".into(), path: "/amenity".into() });
    }

    #[test]
    fn replace_and_add_set_properties() {
        let p = patch(json!([
            {"op": "replace", "path": "/name", "value": "Royal Suite"},
            {"op": "add", "path": "/occupancy", "value": 6}
        ]));
        let out = apply_to(&p, &villa()).unwrap();
        assert_eq!(out.name, "Royal Suite");
        assert_eq!(out.occupancy, 6);
        assert_eq!(out.sqft, 550);
    }

    #[test]
    fn paths_match_case_insensitively() {
        let p = patch(json!([{"op": "replace", "path": "/ImageUrl", "value": "https://x/y.png"}]));
        assert_eq!(apply_to(&p, &villa()).unwrap().image_url, "https://x/y.png");
    }

    #[test]
    fn remove_resets_to_zero_value() {
        let p = patch(json!([
            {"op": "remove", "path": "/details"},
            {"op": "remove", "path": "/rate"}
        ]));
        let out = apply_to(&p, &villa()).unwrap();
        assert_eq!(out.details, "");
        assert_eq!(out.rate, 0.0);
    }

    #[test]
    fn move_and_copy_between_properties() {
        let p = patch(json!([
            {"op": "copy", "from": "/name", "path": "/details"},
            {"op": "move", "from": "/amenity", "path": "/name"}
        ]));
        let out = apply_to(&p, &villa()).unwrap();
        assert_eq!(out.details, "Royal Villa");
        assert_eq!(out.name, "Pool");
        assert_eq!(out.amenity, "");
    }

    #[test]
    fn test_operation_guards_patch() {
        let ok = patch(json!([
            {"op": "test", "path": "/occupancy", "value": 4.0},
            {"op": "replace", "path": "/occupancy", "value": 5}
        ]));
        assert_eq!(apply_to(&ok, &villa()).unwrap().occupancy, 5);

        let failing = patch(json!([{"op": "test", "path": "/name", "value": "Other"}]));
        let state = apply_to(&failing, &villa()).unwrap_err();
        assert_eq!(state.errors("/name").len(), 1);
    }

    #[test]
    fn reports_every_failing_operation() {
        let p = patch(json!([
            {"op": "replace", "path": "/doesNotExist", "value": 1},
            {"op": "replace", "path": "/occupancy", "value": "many"},
            {"op": "replace", "path": "/name", "value": "Still applied"},
            {"op": "replace", "path": "/nested/path", "value": 1},
            {"op": "replace", "path": "name", "value": 1}
        ]));
        let state = apply_to(&p, &villa()).unwrap_err();
        let mut keys: Vec<_> = state.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["/doesNotExist", "/nested/path", "/occupancy", "name"]);
        assert!(state.errors("/occupancy")[0].contains("invalid"));
    }

    #[test]
    fn target_is_left_untouched() {
        let original = villa();
        let p = patch(json!([{"op": "replace", "path": "/name", "value": "Changed"}]));
        let _ = apply_to(&p, &original).unwrap();
        assert_eq!(original.name, "Royal Villa");
    }

    #[test]
    fn touches_reports_written_properties_only() {
        let p = patch(json!([
            {"op": "test", "path": "/id", "value": 1},
            {"op": "replace", "path": "/Name", "value": "n"}
        ]));
        assert!(p.touches("name"));
        assert!(!p.touches("id"));
        assert!(!JsonPatch::default().touches("id"));
    }

    #[test]
    fn move_source_counts_as_written() {
        let p = patch(json!([{"op": "move", "from": "/Id", "path": "/occupancy"}]));
        assert!(p.touches("id"));
        assert!(p.touches("occupancy"));
        let copy = patch(json!([{"op": "copy", "from": "/id", "path": "/occupancy"}]));
        assert!(!copy.touches("id"));
    }
}
