use super::*;

/// Tests looking a user up by id and by username.
///
/// Expected: Ok(Some) for stored users, Ok(None) otherwise
#[tokio::test]
async fn finds_by_id_and_user_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    let by_id = repo.find_by_id(&stored.id).await?;
    assert_eq!(by_id.map(|user| user.user_name), Some(stored.user_name.clone()));

    let by_name = repo.find_by_user_name(&stored.user_name).await?;
    assert_eq!(by_name.map(|user| user.id), Some(stored.id));

    assert!(repo.find_by_id("missing").await?.is_none());
    assert!(repo.find_by_user_name("missing").await?.is_none());

    Ok(())
}

/// Tests that stored admin roles decode to the admin variant.
///
/// Expected: Ok with role SysAdmin
#[tokio::test]
async fn decodes_admin_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(&stored.id).await?.unwrap();

    assert_eq!(user.role, Role::SysAdmin);
    assert!(user.role.is_admin());

    Ok(())
}
