use super::*;

/// Tests the punishment viewer's per-player ban lookup.
///
/// The name comparison is case-insensitive and results come newest first.
///
/// Expected: Ok with only the player's bans, latest time first
#[tokio::test]
async fn finds_player_bans_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    BanFactory::new(db)
        .id(1)
        .name("Griefer")
        .time_millis(CUTOFF + 1000)
        .build()
        .await?;
    BanFactory::new(db)
        .id(2)
        .name("GRIEFER")
        .time_millis(CUTOFF + 2000)
        .build()
        .await?;
    BanFactory::new(db)
        .id(3)
        .name("SomeoneElse")
        .time_millis(CUTOFF + 3000)
        .build()
        .await?;

    let repo = LedgerRepository::new(db);
    let bans = repo.get_bans_for_player("griefer").await?;

    let ids: Vec<_> = bans.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, 1]);

    Ok(())
}

/// Tests that a permanent ban converts to an open-ended punishment.
///
/// Expected: Ok with `until` of None for an `until` column of -1
#[tokio::test]
async fn permanent_ban_has_no_until() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Ban)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    BanFactory::new(db)
        .id(1)
        .name("Griefer")
        .time_millis(CUTOFF)
        .until_millis(-1)
        .build()
        .await?;

    let repo = LedgerRepository::new(db);
    let bans = repo.get_bans_for_player("Griefer").await?;

    assert_eq!(bans.len(), 1);
    assert!(bans[0].until.is_none());

    Ok(())
}
