use super::*;

/// Tests a partial update touching only some fields.
///
/// Expected: Ok with provided fields changed and the rest untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            &stored.id,
            UpdateUserParams {
                email_address: Some("new@example.com".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.email_address, "new@example.com");
    assert_eq!(updated.user_name, stored.user_name);
    assert_eq!(updated.phone_number, stored.phone_number);

    Ok(())
}

/// Tests promoting a customer to admin.
///
/// Expected: Ok with the stored role string switched
#[tokio::test]
async fn updates_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            &stored.id,
            UpdateUserParams {
                role: Some(Role::SysAdmin),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.role, Role::SysAdmin);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update("missing", UpdateUserParams::default()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
