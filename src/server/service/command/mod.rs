//! Per-guild command state services.
//!
//! Synchronization runs validation, then reconciliation, then a single
//! transactional upsert:
//!
//! 1. [`validate::validate_snapshot`] turns the raw payload into typed entries
//! 2. [`reconcile::reconcile`] merges them into a deduplicated batch
//! 3. [`sync::CommandSyncService`] applies the batch through the repository
//!
//! Reads go through [`query::CommandQueryService`]; explicit administrator edits
//! through [`admin::CommandAdminService`].
//!
//! Two syncs for the same guild may run concurrently. They interleave per record
//! at the store, not per batch: each record's upsert is atomic and the usage
//! counter only ever takes the greater value, but a reader may observe some
//! records from one sync and some from the other.

pub mod admin;
pub mod query;
pub mod reconcile;
pub mod sync;
pub mod validate;

pub use admin::CommandAdminService;
pub use query::CommandQueryService;
pub use sync::CommandSyncService;

use crate::server::error::command::CommandError;

fn require_guild_id(guild_id: &str) -> Result<(), CommandError> {
    if guild_id.trim().is_empty() {
        return Err(CommandError::MissingGuildIdentifier);
    }
    Ok(())
}

#[cfg(test)]
mod test;
