use crate::server::{
    error::command::CommandError,
    model::command::EnablePolicy,
    service::command::{CommandAdminService, CommandQueryService, CommandSyncService},
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory::guild_command::GuildCommandFactory};
