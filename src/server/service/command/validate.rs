//! Shape validation for bot-reported command snapshots.

use serde_json::{Map, Value};

use crate::server::{error::command::CommandError, model::command::CommandSnapshotEntry};

/// Validates a raw sync payload into typed snapshot entries.
///
/// The payload must be an object whose `commands` field is an array. Each element
/// must be an object with a non-empty string `name`. The optional `enabled`,
/// `usageCount` and `category` fields may be absent or null; when present they must
/// be a boolean, an integer and a string respectively. Entry order and duplicates
/// are preserved for the reconciler.
///
/// # Returns
/// - `Ok(Vec<CommandSnapshotEntry>)` - Entries in payload order
/// - `Err(CommandError::InvalidPayloadKind)` - Detail names the first offending field
pub fn validate_snapshot(payload: &Value) -> Result<Vec<CommandSnapshotEntry>, CommandError> {
    let Some(object) = payload.as_object() else {
        return Err(invalid("payload must be a JSON object"));
    };

    let commands = match object.get("commands") {
        Some(Value::Array(commands)) => commands,
        Some(_) => return Err(invalid("`commands` must be an array")),
        None => return Err(invalid("missing `commands` field")),
    };

    commands
        .iter()
        .enumerate()
        .map(|(index, element)| validate_entry(index, element))
        .collect()
}

fn validate_entry(index: usize, element: &Value) -> Result<CommandSnapshotEntry, CommandError> {
    let Some(entry) = element.as_object() else {
        return Err(invalid(format!("commands[{}] must be an object", index)));
    };

    let name = match entry.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        _ => {
            return Err(invalid(format!(
                "commands[{}].name must be a non-empty string",
                index
            )))
        }
    };

    let enabled = optional(entry, index, "enabled", "a boolean", Value::as_bool)?;
    let usage_count = optional(entry, index, "usageCount", "an integer", Value::as_i64)?;
    let category = optional(entry, index, "category", "a string", |v| {
        v.as_str().map(str::to_string)
    })?;

    Ok(CommandSnapshotEntry {
        name,
        enabled,
        usage_count,
        category,
    })
}

/// Reads an optional field, treating null the same as absent.
fn optional<T>(
    entry: &Map<String, Value>,
    index: usize,
    field: &str,
    expected: &str,
    extract: impl Fn(&Value) -> Option<T>,
) -> Result<Option<T>, CommandError> {
    match entry.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => extract(value).map(Some).ok_or_else(|| {
            invalid(format!(
                "commands[{}].{} must be {}",
                index, field, expected
            ))
        }),
    }
}

fn invalid(detail: impl Into<String>) -> CommandError {
    CommandError::InvalidPayloadKind(detail.into())
}
