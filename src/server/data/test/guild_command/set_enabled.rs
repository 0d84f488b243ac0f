use super::*;

/// Tests disabling an enabled command.
///
/// Expected: Ok(Some) with is_enabled false and refreshed updated_at
#[tokio::test]
async fn disables_command() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .updated_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;

    let now = Utc::now();
    let updated = GuildCommandRepository::new(db)
        .set_enabled("g1", "ping", false, now)
        .await?
        .unwrap();

    assert!(!updated.is_enabled);
    assert!((updated.updated_at - now).num_seconds().abs() < 2);

    Ok(())
}

/// Tests the usage counter is untouched by toggling.
///
/// Expected: Ok(Some) with usage_count unchanged
#[tokio::test]
async fn leaves_usage_count_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .enabled(false)
        .usage_count(9)
        .build()
        .await?;

    let updated = GuildCommandRepository::new(db)
        .set_enabled("g1", "ping", true, Utc::now())
        .await?
        .unwrap();

    assert!(updated.is_enabled);
    assert_eq!(updated.usage_count, 9);

    Ok(())
}

/// Tests toggling a command the guild has no record of.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_command() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = GuildCommandRepository::new(db)
        .set_enabled("g1", "ping", false, Utc::now())
        .await?;

    assert!(updated.is_none());

    Ok(())
}
