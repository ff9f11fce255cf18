// src/infrastructure/json_payload.rs
//
// JSON payload decoding (serde_json)

use serde::de::DeserializeOwned;

use crate::error::AppResult;

/// Decode a top-level JSON array into records, preserving order
pub fn parse_json_collection<T: DeserializeOwned>(json: &str) -> AppResult<Vec<T>> {
    let records = serde_json::from_str(json)?;
    Ok(records)
}
