use super::*;
use chrono::Duration;

/// Tests the punishment viewer's per-player check lookup.
///
/// The name comparison is case-insensitive and results come newest first.
///
/// Expected: Ok with only the player's checks, latest date first
#[tokio::test]
async fn finds_player_checks_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CheckLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = cutoff();
    CheckLogFactory::new(db)
        .date(base + Duration::minutes(1))
        .target("Suspect")
        .build()
        .await?;
    CheckLogFactory::new(db)
        .date(base + Duration::minutes(2))
        .target("SUSPECT")
        .build()
        .await?;
    CheckLogFactory::new(db)
        .date(base + Duration::minutes(3))
        .target("SomeoneElse")
        .build()
        .await?;

    let repo = CheckLogRepository::new(db);
    let checks = repo.get_checks_for_player("suspect").await?;

    let dates: Vec<_> = checks.iter().map(|c| c.date).collect();
    assert_eq!(
        dates,
        vec![base + Duration::minutes(2), base + Duration::minutes(1)]
    );

    Ok(())
}
