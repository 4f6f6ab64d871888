use super::*;

/// Tests counting which requested amenity ids exist in the catalog.
///
/// Expected: Ok with only stored ids counted
#[tokio::test]
async fn counts_only_stored_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Amenity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wifi = factory::amenity::create_amenity(db).await?;
    let pool = factory::amenity::create_amenity(db).await?;

    let repo = AmenityRepository::new(db);

    assert_eq!(repo.count_existing(&[wifi.id, pool.id]).await?, 2);
    assert_eq!(repo.count_existing(&[wifi.id, pool.id + 100]).await?, 1);
    assert_eq!(repo.count_existing(&[]).await?, 0);

    Ok(())
}
