use crate::error::{AppError, AppResult};
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

pub const DETERMINISM_FIELD: &str = "determinism_hash";

pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> AppResult<Vec<u8>> {
    let json_value = serde_json::to_value(value)
        .map_err(|e| AppError::internal(format!("json serialize error: {e}")))?;
    serde_json::to_vec(&canonicalize(json_value))
        .map_err(|e| AppError::internal(format!("json encode error: {e}")))
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

pub fn determinism_hash(mut value: Value) -> AppResult<String> {
    let obj = value
        .as_object_mut()
        .ok_or_else(|| AppError::validation("determinism hash value must be an object"))?;
    obj.insert(DETERMINISM_FIELD.to_string(), Value::String(String::new()));
    let bytes = to_canonical_json_bytes(&value)?;
    Ok(sha256_hex(&bytes))
}

pub fn verify_determinism_hash(value: &Value) -> AppResult<()> {
    let recorded = value
        .get(DETERMINISM_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::validation(format!("{DETERMINISM_FIELD} is missing")))?;
    let expected = determinism_hash(value.clone())?;
    if recorded != expected {
        return Err(AppError::validation(format!(
            "{DETERMINISM_FIELD} mismatch; file was modified after it was written"
        )));
    }
    Ok(())
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(key, v)| (key, canonicalize(v)))
                .collect();
            Value::Object(sorted.into_iter().collect::<Map<String, Value>>())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}
