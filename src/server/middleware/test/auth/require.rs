use super::*;

/// Tests that an anonymous session is rejected.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() {
    let mut test = setup().await;
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session, &[]);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests that a logged-in user passes a permissionless guard.
///
/// Expected: Ok with the caller's account
#[tokio::test]
async fn allows_logged_in_user() {
    let mut test = setup().await;
    let (db, session) = test.db_and_session().await.unwrap();

    UserFactory::new(db)
        .discord_id("100")
        .name("TestUser")
        .build()
        .await
        .unwrap();
    AuthSession::new(session).set_user_id(100).await.unwrap();

    let guard = AuthGuard::new(db, session, &[]);
    let result = guard.require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().discord_id, 100);
}

/// Tests that a session for a deleted account is rejected.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_session_for_missing_user() {
    let mut test = setup().await;
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(100).await.unwrap();

    let guard = AuthGuard::new(db, session, &[]);
    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(100)))
    ));
}

/// Tests that the admin permission follows the allow-list.
///
/// Expected: Ok for a listed id, Err(AccessDenied) for everyone else
#[tokio::test]
async fn admin_permission_follows_allow_list() {
    let mut test = setup().await;
    let (db, session) = test.db_and_session().await.unwrap();

    UserFactory::new(db).discord_id("100").build().await.unwrap();
    AuthSession::new(session).set_user_id(100).await.unwrap();

    let allowed = AuthGuard::new(db, session, &[100]);
    assert!(allowed.require(&[Permission::Admin]).await.is_ok());

    let denied = AuthGuard::new(db, session, &[200]);
    let result = denied.require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(100, _)))
    ));
}
