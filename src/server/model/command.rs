//! Guild command domain models and sync parameters.
//!
//! Provides the stored command record, the validated snapshot entry produced from a
//! bot payload, and the reconciled batch handed to the repository for a single
//! transactional upsert.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::model::command::GuildCommandDto;

/// Stored state of one command within one guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildCommand {
    /// Opaque Discord guild identifier.
    pub guild_id: String,
    /// Registered command name, case-sensitive.
    pub command_name: String,
    /// Administrator override; disabled commands are rejected by the bot.
    pub is_enabled: bool,
    /// Number of recorded invocations.
    pub usage_count: u64,
    /// Optional grouping used for display ordering.
    pub category: Option<String>,
    /// Timestamp of the last write to this record.
    pub updated_at: DateTime<Utc>,
}

impl GuildCommand {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildCommand)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored usage counter is negative
    pub fn from_entity(entity: entity::guild_command::Model) -> Result<Self, DbErr> {
        let usage_count = u64::try_from(entity.usage_count).map_err(|e| {
            DbErr::Custom(format!(
                "Invalid usage_count {} for command '{}' in guild {}: {}",
                entity.usage_count, entity.command_name, entity.guild_id, e
            ))
        })?;

        Ok(Self {
            guild_id: entity.guild_id,
            command_name: entity.command_name,
            is_enabled: entity.is_enabled,
            usage_count,
            category: entity.category,
            updated_at: entity.updated_at,
        })
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> GuildCommandDto {
        GuildCommandDto {
            guild_id: self.guild_id,
            command_name: self.command_name,
            is_enabled: self.is_enabled,
            usage_count: self.usage_count,
            category: self.category,
            updated_at: self.updated_at,
        }
    }

    /// Category used for ordering; empty strings sort with missing categories.
    pub fn display_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// A validated entry from a command snapshot.
///
/// Optional fields are `None` when the payload omitted them or set them to null.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandSnapshotEntry {
    pub name: String,
    pub enabled: Option<bool>,
    pub usage_count: Option<i64>,
    pub category: Option<String>,
}

impl CommandSnapshotEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_usage_count(mut self, usage_count: i64) -> Self {
        self.usage_count = Some(usage_count);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Whether a snapshot entry without an explicit `enabled` flag may overwrite the
/// stored flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnablePolicy {
    /// Entries without `enabled` create commands as enabled but leave an existing
    /// stored flag untouched. Explicit `enabled` values always overwrite.
    #[default]
    Preserve,
    /// Every entry writes `enabled != false`, so a snapshot re-enables commands an
    /// administrator disabled unless it explicitly reports them disabled.
    Snapshot,
}

impl FromStr for EnablePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "snapshot" => Ok(Self::Snapshot),
            other => Err(format!(
                "unknown enable policy '{}', expected 'preserve' or 'snapshot'",
                other
            )),
        }
    }
}

impl fmt::Display for EnablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preserve => write!(f, "preserve"),
            Self::Snapshot => write!(f, "snapshot"),
        }
    }
}

/// Write instruction for a single command produced by reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandUpsert {
    pub command_name: String,
    /// Value written on insert, and on update when `overwrite_enabled` is set.
    pub is_enabled: bool,
    /// Incoming counter; the store keeps the greater of this and the stored value.
    pub usage_count: i64,
    pub category: Option<String>,
    pub overwrite_enabled: bool,
    pub overwrite_category: bool,
}

/// Reconciled upserts for one guild, in first-occurrence order with unique names.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandBatch {
    pub guild_id: String,
    pub reconciled_at: DateTime<Utc>,
    pub upserts: Vec<CommandUpsert>,
}

impl CommandBatch {
    pub fn len(&self) -> usize {
        self.upserts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upserts.is_empty()
    }
}

/// Outcome of a successful sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    /// Number of distinct commands in the submitted batch.
    pub records_affected: usize,
}
