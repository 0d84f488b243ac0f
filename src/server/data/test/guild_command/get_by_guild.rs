use super::*;

/// Tests getting all commands for a guild.
///
/// Verifies that only the requested guild's commands are returned.
///
/// Expected: Ok with the guild's commands
#[tokio::test]
async fn returns_commands_for_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_command(db, "g1").await?;
    factory::create_guild_command(db, "g1").await?;
    factory::create_guild_command(db, "g2").await?;

    let commands = GuildCommandRepository::new(db).get_by_guild("g1").await?;

    assert_eq!(commands.len(), 2);
    assert!(commands.iter().all(|c| c.guild_id == "g1"));

    Ok(())
}

/// Tests getting commands for a guild with no records.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let commands = GuildCommandRepository::new(db).get_by_guild("g1").await?;

    assert!(commands.is_empty());

    Ok(())
}
