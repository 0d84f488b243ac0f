use super::*;

/// Tests finding an existing command.
///
/// Expected: Ok(Some) with stored values
#[tokio::test]
async fn finds_existing_command() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .usage_count(7)
        .category(Some("utility".to_string()))
        .build()
        .await?;

    let found = GuildCommandRepository::new(db).find("g1", "ping").await?;

    let found = found.unwrap();
    assert_eq!(found.guild_id, "g1");
    assert_eq!(found.usage_count, 7);
    assert_eq!(found.category.as_deref(), Some("utility"));

    Ok(())
}

/// Tests command names are matched case-sensitively.
///
/// Expected: Ok(None) for a differently cased name
#[tokio::test]
async fn matches_command_name_case_sensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .build()
        .await?;

    let found = GuildCommandRepository::new(db).find("g1", "Ping").await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests a command stored for another guild is not found.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g2")
        .command_name("ping")
        .build()
        .await?;

    let found = GuildCommandRepository::new(db).find("g1", "ping").await?;

    assert!(found.is_none());

    Ok(())
}
