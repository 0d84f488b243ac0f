use super::*;

/// Tests upserting a batch into an empty table.
///
/// Verifies that every upsert creates a record with the batch values.
///
/// Expected: Ok with one record per upsert
#[tokio::test]
async fn inserts_new_commands() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildCommandRepository::new(db);
    repo.upsert_batch(&batch("g1", vec![upsert("ping", 0), upsert("ban", 4)]))
        .await?;

    let stored = entity::prelude::GuildCommand::find()
        .filter(entity::guild_command::Column::GuildId.eq("g1"))
        .all(db)
        .await?;
    assert_eq!(stored.len(), 2);

    let ban = stored.iter().find(|c| c.command_name == "ban").unwrap();
    assert!(ban.is_enabled);
    assert_eq!(ban.usage_count, 4);

    Ok(())
}

/// Tests an empty batch is a no-op.
///
/// Expected: Ok with no records created
#[tokio::test]
async fn ignores_empty_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    GuildCommandRepository::new(db)
        .upsert_batch(&batch("g1", Vec::new()))
        .await?;

    let count = entity::prelude::GuildCommand::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests a lower incoming counter does not overwrite a higher stored counter.
///
/// Expected: Ok with stored counter unchanged
#[tokio::test]
async fn keeps_greater_stored_usage_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .usage_count(10)
        .build()
        .await?;

    let repo = GuildCommandRepository::new(db);
    repo.upsert_batch(&batch("g1", vec![upsert("ping", 3)])).await?;

    let ping = repo.find("g1", "ping").await?.unwrap();
    assert_eq!(ping.usage_count, 10);

    Ok(())
}

/// Tests a higher incoming counter raises the stored counter.
///
/// Expected: Ok with stored counter raised
#[tokio::test]
async fn raises_lower_stored_usage_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .usage_count(10)
        .build()
        .await?;

    let repo = GuildCommandRepository::new(db);
    repo.upsert_batch(&batch("g1", vec![upsert("ping", 25)]))
        .await?;

    let ping = repo.find("g1", "ping").await?.unwrap();
    assert_eq!(ping.usage_count, 25);

    Ok(())
}

/// Tests the stored enable flag survives when the upsert may not overwrite it.
///
/// Expected: Ok with command still disabled
#[tokio::test]
async fn preserves_enabled_flag_without_overwrite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .enabled(false)
        .build()
        .await?;

    let repo = GuildCommandRepository::new(db);
    repo.upsert_batch(&batch("g1", vec![upsert("ping", 0)])).await?;

    let ping = repo.find("g1", "ping").await?.unwrap();
    assert!(!ping.is_enabled);

    Ok(())
}

/// Tests the enable flag is overwritten when the upsert is flagged to do so.
///
/// Expected: Ok with command re-enabled
#[tokio::test]
async fn overwrites_enabled_flag_when_flagged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .enabled(false)
        .build()
        .await?;

    let mut ping = upsert("ping", 0);
    ping.overwrite_enabled = true;

    let repo = GuildCommandRepository::new(db);
    repo.upsert_batch(&batch("g1", vec![ping])).await?;

    assert!(repo.find("g1", "ping").await?.unwrap().is_enabled);

    Ok(())
}

/// Tests category handling on conflict.
///
/// Verifies that a category is only replaced when the upsert is flagged to
/// overwrite it, and kept otherwise.
///
/// Expected: Ok with category replaced for flagged upsert only
#[tokio::test]
async fn overwrites_category_only_when_flagged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["ping", "ban"] {
        factory::guild_command::GuildCommandFactory::new(db, "g1")
            .command_name(name)
            .category(Some("general".to_string()))
            .build()
            .await?;
    }

    let mut ban = upsert("ban", 0);
    ban.category = Some("moderation".to_string());
    ban.overwrite_category = true;

    let repo = GuildCommandRepository::new(db);
    repo.upsert_batch(&batch("g1", vec![upsert("ping", 0), ban]))
        .await?;

    assert_eq!(
        repo.find("g1", "ping").await?.unwrap().category.as_deref(),
        Some("general")
    );
    assert_eq!(
        repo.find("g1", "ban").await?.unwrap().category.as_deref(),
        Some("moderation")
    );

    Ok(())
}

/// Tests that updated_at is refreshed on conflict.
///
/// Expected: Ok with updated_at set to the batch timestamp
#[tokio::test]
async fn refreshes_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let original_time = Utc::now() - Duration::hours(2);
    factory::guild_command::GuildCommandFactory::new(db, "g1")
        .command_name("ping")
        .updated_at(original_time)
        .build()
        .await?;

    let batch = batch("g1", vec![upsert("ping", 0)]);
    let repo = GuildCommandRepository::new(db);
    repo.upsert_batch(&batch).await?;

    let ping = repo.find("g1", "ping").await?.unwrap();
    let diff = (ping.updated_at - batch.reconciled_at).num_seconds().abs();
    assert!(diff < 2, "updated_at should match the batch timestamp");

    Ok(())
}

/// Tests upserts never create duplicate records for the same key.
///
/// Expected: Ok with exactly one record after repeated upserts
#[tokio::test]
async fn never_duplicates_a_command() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildCommandRepository::new(db);
    for count in [1, 2, 3] {
        repo.upsert_batch(&batch("g1", vec![upsert("ping", count)]))
            .await?;
    }

    let count = entity::prelude::GuildCommand::find()
        .filter(entity::guild_command::Column::CommandName.eq("ping"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests the same command name in different guilds stays independent.
///
/// Expected: Ok with one record per guild
#[tokio::test]
async fn keeps_guilds_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildCommandRepository::new(db);
    repo.upsert_batch(&batch("g1", vec![upsert("ping", 5)])).await?;
    repo.upsert_batch(&batch("g2", vec![upsert("ping", 1)])).await?;

    assert_eq!(repo.find("g1", "ping").await?.unwrap().usage_count, 5);
    assert_eq!(repo.find("g2", "ping").await?.unwrap().usage_count, 1);

    Ok(())
}

/// Tests batches larger than one statement are fully applied.
///
/// Expected: Ok with every command stored
#[tokio::test]
async fn applies_batches_spanning_several_statements() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let upserts = (0..1200).map(|i| upsert(&format!("cmd_{i}"), i)).collect();

    GuildCommandRepository::new(db)
        .upsert_batch(&batch("g1", upserts))
        .await?;

    let count = entity::prelude::GuildCommand::find().count(db).await?;
    assert_eq!(count, 1200);

    Ok(())
}

/// Tests a failing batch leaves no partial state behind.
///
/// A trigger rejects one command that lands in the second statement of the batch,
/// after the first statement has already written inside the transaction.
///
/// Expected: Err with no records created from the batch
#[tokio::test]
async fn rolls_back_failed_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_command_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(
        "CREATE TRIGGER reject_boom BEFORE INSERT ON guild_command \
         WHEN NEW.command_name = 'boom' \
         BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .await?;

    let mut boom = upsert("boom", 0);
    boom.overwrite_enabled = true;

    let result = GuildCommandRepository::new(db)
        .upsert_batch(&batch("g1", vec![upsert("ping", 0), boom]))
        .await;

    assert!(result.is_err());

    let count = entity::prelude::GuildCommand::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
