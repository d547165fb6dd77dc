//! Shallow-merge helpers.
//!
//! Every "edit a field" operation in the builder and the admin surface is a
//! shallow merge of `{field: value}` into a record. Records are projected to
//! a JSON object, merged, and decoded back into their type, so a merge that
//! would break the record's shape is rejected instead of stored.

use crate::error::SchemaError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Shallow-merge `patch` into `base` (top-level keys replace)
pub fn merge_object(base: &mut Value, patch: &Map<String, Value>) -> Result<(), SchemaError> {
    let object = base.as_object_mut().ok_or(SchemaError::NotAnObject)?;
    for (key, value) in patch {
        object.insert(key.clone(), value.clone());
    }
    Ok(())
}

/// Merge `{field: value}` into `target`, returning the rebuilt value.
///
/// `allowed` lists the field names that may be set; an empty list allows any.
pub fn set_field<T>(
    target: &T,
    target_name: &str,
    allowed: &[&str],
    field: &str,
    value: Value,
) -> Result<T, SchemaError>
where
    T: Serialize + DeserializeOwned,
{
    if !allowed.is_empty() && !allowed.contains(&field) {
        return Err(SchemaError::FieldNotFound {
            target: target_name.to_string(),
            field: field.to_string(),
        });
    }

    let mut projected = to_object(target)?;
    let mut patch = Map::new();
    patch.insert(field.to_string(), value);
    merge_object(&mut projected, &patch)?;

    serde_json::from_value(projected).map_err(|e| SchemaError::InvalidField {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

pub(crate) fn to_object<T: Serialize>(target: &T) -> Result<Value, SchemaError> {
    match serde_json::to_value(target) {
        Ok(value @ Value::Object(_)) => Ok(value),
        _ => Err(SchemaError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TeamMember;
    use serde_json::json;

    #[test]
    fn test_merge_replaces_top_level_keys() {
        let mut base = json!({ "a": 1, "b": { "c": 2 } });
        let patch = json!({ "b": 3 });
        merge_object(&mut base, patch.as_object().unwrap()).unwrap();
        assert_eq!(base, json!({ "a": 1, "b": 3 }));
    }

    #[test]
    fn test_set_field_rejects_unknown_name() {
        let member = TeamMember::default();
        let result = set_field(&member, "TeamMember", &["name", "role"], "salary", json!(1));
        assert!(matches!(result, Err(SchemaError::FieldNotFound { .. })));
    }

    #[test]
    fn test_set_field_rejects_wrong_shape() {
        let member = TeamMember::default();
        let result = set_field(&member, "TeamMember", &[], "name", json!([1, 2]));
        assert!(matches!(result, Err(SchemaError::InvalidField { .. })));
    }

    #[test]
    fn test_set_field_updates_value() {
        let member = TeamMember::default();
        let updated = set_field(&member, "TeamMember", &[], "role", json!("Admin")).unwrap();
        assert_eq!(updated.role, "Admin");
    }
}
