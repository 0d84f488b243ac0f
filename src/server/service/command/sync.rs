use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::guild_command::GuildCommandRepository,
    error::command::CommandError,
    model::command::{EnablePolicy, SyncSummary},
    service::command::{reconcile::reconcile, validate::validate_snapshot},
};

/// Service applying bot-reported command snapshots to stored guild state.
pub struct CommandSyncService<'a> {
    db: &'a DatabaseConnection,
    policy: EnablePolicy,
}

impl<'a> CommandSyncService<'a> {
    /// Creates a new CommandSyncService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `policy` - Whether entries without `enabled` may overwrite stored flags
    pub fn new(db: &'a DatabaseConnection, policy: EnablePolicy) -> Self {
        Self { db, policy }
    }

    /// Synchronizes a guild's commands with a snapshot payload.
    ///
    /// Validates the payload, reconciles it into a batch and applies the batch as one
    /// transaction. Commands missing from the snapshot are left untouched. Running
    /// the same snapshot twice changes nothing but `updated_at`. Failures are not
    /// retried here.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the snapshot belongs to
    /// - `payload` - Raw request body, expected to hold a `commands` array
    ///
    /// # Returns
    /// - `Ok(SyncSummary)` - Number of distinct commands in the applied batch
    /// - `Err(CommandError::InvalidPayloadKind)` - Malformed payload, store untouched
    /// - `Err(CommandError::MissingGuildIdentifier)` - Blank guild id, store untouched
    /// - `Err(CommandError::StorePersistenceFailure)` - Batch rolled back
    pub async fn synchronize(
        &self,
        guild_id: &str,
        payload: &Value,
    ) -> Result<SyncSummary, CommandError> {
        let entries = validate_snapshot(payload).inspect_err(|e| {
            tracing::debug!("Rejected command snapshot for guild {}: {}", guild_id, e)
        })?;

        let batch = reconcile(guild_id, entries, self.policy, Utc::now())?;

        GuildCommandRepository::new(self.db)
            .upsert_batch(&batch)
            .await
            .map_err(|e| {
                tracing::error!("Failed to sync commands for guild {}: {}", guild_id, e);
                CommandError::StorePersistenceFailure(e)
            })?;

        tracing::info!(
            "Synced {} commands for guild {} (enable policy: {})",
            batch.len(),
            guild_id,
            self.policy
        );

        Ok(SyncSummary {
            records_affected: batch.len(),
        })
    }
}
