use super::*;

/// Tests that a session holding a valid user id resolves to that user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_authenticated_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    session.insert(SESSION_AUTH_USER_ID, user.id.clone()).await?;

    let resolved = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests a request with no user id in the session.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn rejects_missing_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that no longer exists.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    session
        .insert(SESSION_AUTH_USER_ID, "gone".to_string())
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests the admin permission check for both roles.
///
/// Expected: Ok for the admin, AccessDenied for the customer
#[tokio::test]
async fn admin_permission_requires_the_admin_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::user::create_admin(db).await?;
    session.insert(SESSION_AUTH_USER_ID, admin.id.clone()).await?;

    let resolved = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;
    assert!(resolved.role.is_admin());

    let customer = factory::user::create_user(db).await?;
    session
        .insert(SESSION_AUTH_USER_ID, customer.id.clone())
        .await?;

    let result = AuthGuard::new(db, session).require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}
