use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored state of one command in one guild.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GuildCommandDto {
    pub guild_id: String,
    pub command_name: String,
    pub is_enabled: bool,
    pub usage_count: u64,
    pub category: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// One entry of a bot-reported command snapshot.
///
/// Documents the accepted shape only. Sync bodies are validated from raw JSON so that
/// shape errors can be reported as `InvalidPayloadKind` with the offending index.
#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommandSnapshotEntryDto {
    pub name: String,
    pub enabled: Option<bool>,
    pub usage_count: Option<i64>,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct SyncCommandsDto {
    pub commands: Vec<CommandSnapshotEntryDto>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct SyncCommandsResultDto {
    pub success: bool,
    /// Number of distinct commands written by the sync.
    pub synced: usize,
    /// The guild's full command list after the sync, in display order.
    ///
    /// Omitted when the batch was committed but the listing could not be read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<GuildCommandDto>>,
}

#[derive(Serialize, Deserialize, ToSchema, PartialEq, Clone, Debug)]
pub struct SetCommandEnabledDto {
    pub enabled: bool,
}
