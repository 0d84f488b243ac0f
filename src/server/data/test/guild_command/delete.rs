use super::*;

/// Tests deleting a command.
///
/// Verifies that only the targeted record is removed.
///
/// Expected: Ok(true) with other records intact
#[tokio::test]
async fn deletes_command() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["ping", "ban"] {
        factory::guild_command::GuildCommandFactory::new(db, "g1")
            .command_name(name)
            .build()
            .await?;
    }

    let repo = GuildCommandRepository::new(db);
    let deleted = repo.delete("g1", "ping").await?;

    assert!(deleted);
    assert!(repo.find("g1", "ping").await?.is_none());
    assert!(repo.find("g1", "ban").await?.is_some());

    Ok(())
}

/// Tests deleting a command the guild has no record of.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_command() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = GuildCommandRepository::new(db).delete("g1", "ping").await?;

    assert!(!deleted);

    Ok(())
}
