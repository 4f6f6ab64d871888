use super::*;

/// Tests logging in with the stored credentials.
///
/// Expected: Ok with the matching user
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::UserFactory::new(db)
        .user_name("ana")
        .password("hunter2")
        .build()
        .await?;

    let user = AuthService::new(db).login("ana", "hunter2").await?;

    assert_eq!(user.id, stored.id);

    Ok(())
}

/// Tests that an unknown username and a wrong password fail identically, so
/// login responses cannot be used to enumerate accounts.
///
/// Expected: InvalidCredentials in both cases
#[tokio::test]
async fn unknown_user_and_wrong_password_are_indistinguishable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_name("ana")
        .password("hunter2")
        .build()
        .await?;

    let service = AuthService::new(db);

    let wrong_password = service.login("ana", "wrong").await.unwrap_err();
    let unknown_user = service.login("nobody", "hunter2").await.unwrap_err();

    assert!(matches!(
        wrong_password,
        AppError::AuthErr(AuthError::InvalidCredentials)
    ));
    assert!(matches!(
        unknown_user,
        AppError::AuthErr(AuthError::InvalidCredentials)
    ));

    Ok(())
}
