use super::*;

/// Tests incrementing a command's usage counter.
///
/// Expected: Ok(Some) with usage_count raised by one per call
#[tokio::test]
async fn increments_usage_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .usage_count(4)
        .build()
        .await?;

    let repo = GuildCommandRepository::new(db);
    repo.increment_usage("g1", "ping", Utc::now()).await?;
    let updated = repo
        .increment_usage("g1", "ping", Utc::now())
        .await?
        .unwrap();

    assert_eq!(updated.usage_count, 6);

    Ok(())
}

/// Tests incrementing does not create missing commands.
///
/// Expected: Ok(None) and no record created
#[tokio::test]
async fn does_not_create_missing_command() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = GuildCommandRepository::new(db)
        .increment_usage("g1", "ping", Utc::now())
        .await?;

    assert!(updated.is_none());
    assert_eq!(entity::prelude::GuildCommand::find().count(db).await?, 0);

    Ok(())
}
