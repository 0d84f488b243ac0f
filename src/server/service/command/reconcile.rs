//! Merge of a validated snapshot into a write batch.
//!
//! Reconciliation is pure: it never reads the store. Stored values that must
//! survive a sync (higher usage counters, administrator overrides) are protected by
//! the conflict rules of the batch upsert instead.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::server::{
    error::command::CommandError,
    model::command::{CommandBatch, CommandSnapshotEntry, CommandUpsert, EnablePolicy},
};

/// Explicit fields collected for one command name across duplicate entries.
struct MergedEntry {
    name: String,
    enabled: Option<bool>,
    usage_count: Option<i64>,
    category: Option<String>,
}

/// Builds the upsert batch for one guild from validated snapshot entries.
///
/// Produces one upsert per distinct command name, ordered by first occurrence. For
/// duplicate names the last entry that sets a field wins for that field. Missing
/// `enabled` defaults to `true`, and missing or negative `usageCount` to `0`.
///
/// # Arguments
/// - `guild_id` - Guild the snapshot belongs to
/// - `entries` - Validated entries in payload order
/// - `policy` - Whether entries without `enabled` overwrite the stored flag
/// - `now` - Timestamp written to every record in the batch
///
/// # Returns
/// - `Ok(CommandBatch)` - Batch sized to the number of distinct names
/// - `Err(CommandError::MissingGuildIdentifier)` - Guild id is empty or blank
pub fn reconcile(
    guild_id: &str,
    entries: Vec<CommandSnapshotEntry>,
    policy: EnablePolicy,
    now: DateTime<Utc>,
) -> Result<CommandBatch, CommandError> {
    if guild_id.trim().is_empty() {
        return Err(CommandError::MissingGuildIdentifier);
    }

    let mut positions: HashMap<String, usize> = HashMap::with_capacity(entries.len());
    let mut merged: Vec<MergedEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        let usage_count = entry.usage_count.filter(|count| *count >= 0);

        match positions.get(&entry.name) {
            Some(&position) => {
                let existing = &mut merged[position];
                if entry.enabled.is_some() {
                    existing.enabled = entry.enabled;
                }
                if usage_count.is_some() {
                    existing.usage_count = usage_count;
                }
                if entry.category.is_some() {
                    existing.category = entry.category;
                }
            }
            None => {
                positions.insert(entry.name.clone(), merged.len());
                merged.push(MergedEntry {
                    name: entry.name,
                    enabled: entry.enabled,
                    usage_count,
                    category: entry.category,
                });
            }
        }
    }

    let upserts = merged
        .into_iter()
        .map(|entry| CommandUpsert {
            overwrite_enabled: entry.enabled.is_some() || policy == EnablePolicy::Snapshot,
            overwrite_category: entry.category.is_some(),
            command_name: entry.name,
            is_enabled: entry.enabled.unwrap_or(true),
            usage_count: entry.usage_count.unwrap_or(0),
            category: entry.category,
        })
        .collect();

    Ok(CommandBatch {
        guild_id: guild_id.to_string(),
        reconciled_at: now,
        upserts,
    })
}
