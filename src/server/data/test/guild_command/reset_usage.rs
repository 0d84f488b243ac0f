use super::*;

/// Tests resetting a command's usage counter.
///
/// Expected: Ok(Some) with usage_count 0 and enable flag unchanged
#[tokio::test]
async fn resets_usage_count_to_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .enabled(false)
        .usage_count(40)
        .build()
        .await?;

    let updated = GuildCommandRepository::new(db)
        .reset_usage("g1", "ping", Utc::now())
        .await?
        .unwrap();

    assert_eq!(updated.usage_count, 0);
    assert!(!updated.is_enabled);

    Ok(())
}

/// Tests resetting a command the guild has no record of.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_command() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = GuildCommandRepository::new(db)
        .reset_usage("g1", "ping", Utc::now())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
