use super::*;

/// Tests linking an unclaimed Minecraft name.
///
/// Expected: Ok with the binding readable back through the service
#[tokio::test]
async fn links_unclaimed_name() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db).discord_id("100").build().await?;

    let service = UserService::new(db);
    service
        .set_minecraft_name(SetMinecraftNameParam {
            discord_id: 100,
            name: "Steve".to_string(),
        })
        .await?;

    let user = service.get_user(100).await?.unwrap();
    assert_eq!(user.minecraft_name.as_deref(), Some("Steve"));

    Ok(())
}

/// Tests that a name claimed by another account is rejected.
///
/// The claim check is case-insensitive - "steve" and "Steve" are the same
/// in-game identity.
///
/// Expected: Err(BadRequest), the original binding untouched
#[tokio::test]
async fn rejects_name_claimed_by_other_account() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db)
        .discord_id("100")
        .minecraft_name("Steve")
        .build()
        .await?;
    UserFactory::new(db).discord_id("200").build().await?;

    let service = UserService::new(db);
    let result = service
        .set_minecraft_name(SetMinecraftNameParam {
            discord_id: 200,
            name: "steve".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let owner = service.get_user(100).await?.unwrap();
    assert_eq!(owner.minecraft_name.as_deref(), Some("Steve"));
    let claimer = service.get_user(200).await?.unwrap();
    assert!(claimer.minecraft_name.is_none());

    Ok(())
}

/// Tests relinking the caller's own name in a different casing.
///
/// Expected: Ok with the new casing stored
#[tokio::test]
async fn allows_relinking_own_name() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db)
        .discord_id("100")
        .minecraft_name("steve")
        .build()
        .await?;

    let service = UserService::new(db);
    service
        .set_minecraft_name(SetMinecraftNameParam {
            discord_id: 100,
            name: "Steve".to_string(),
        })
        .await?;

    let user = service.get_user(100).await?.unwrap();
    assert_eq!(user.minecraft_name.as_deref(), Some("Steve"));

    Ok(())
}

/// Tests that an empty name is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_name() -> Result<(), AppError> {
    let mut test = setup().await;
    let db = test.database().await.unwrap();

    UserFactory::new(db).discord_id("100").build().await?;

    let service = UserService::new(db);
    let result = service
        .set_minecraft_name(SetMinecraftNameParam {
            discord_id: 100,
            name: "   ".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
