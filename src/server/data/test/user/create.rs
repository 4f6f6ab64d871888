use super::*;

/// Tests creating a user account.
///
/// Verifies that the repository persists all registration fields and that the
/// stored role string decodes back to the requested role.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_customer_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("user-abc".to_string(), Role::Customer, register_params("ana"))
        .await?;

    assert_eq!(user.id, "user-abc");
    assert_eq!(user.user_name, "ana");
    assert_eq!(user.role, Role::Customer);
    assert_eq!(user.email_address, "ana@example.com");

    Ok(())
}

/// Tests the unique constraint on usernames.
///
/// Expected: Err(DbErr) on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create("user-1".to_string(), Role::Customer, register_params("ana"))
        .await?;

    let result = repo
        .create("user-2".to_string(), Role::Customer, register_params("ana"))
        .await;

    assert!(result.is_err());

    Ok(())
}
