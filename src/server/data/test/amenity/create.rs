use super::*;

/// Tests creating an amenity and listing the catalog.
///
/// Expected: Ok with amenities ordered by code
#[tokio::test]
async fn creates_and_lists_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Amenity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AmenityRepository::new(db);
    repo.create(CreateAmenityParams {
        code: "wifi".to_string(),
        label: "Wi-Fi".to_string(),
    })
    .await?;
    repo.create(CreateAmenityParams {
        code: "gym".to_string(),
        label: "Gym".to_string(),
    })
    .await?;

    let amenities = repo.list().await?;

    assert_eq!(amenities.len(), 2);
    assert_eq!(amenities[0].code, "gym");
    assert_eq!(amenities[1].code, "wifi");

    Ok(())
}

/// Tests the unique constraint on amenity codes.
///
/// Expected: Err(DbErr) on the second insert with the same code
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Amenity)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::amenity::create_amenity_with_code(db, "wifi").await?;

    let repo = AmenityRepository::new(db);
    let result = repo
        .create(CreateAmenityParams {
            code: "wifi".to_string(),
            label: "Wi-Fi".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
