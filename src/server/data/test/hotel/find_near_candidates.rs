use super::*;

/// Tests the bounding-box pre-filter used by the proximity guard.
///
/// A delta of 0.005 degrees is roughly 500 m of latitude. Hotels inside the
/// box and in the same city are candidates; hotels outside the box or in
/// another city are not.
///
/// Expected: Ok with only the nearby same-city hotel
#[tokio::test]
async fn filters_by_box_and_city() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let near = factory::hotel::HotelFactory::new(db)
        .city("Lisbon")
        .coordinates(38.7230, -9.1390)
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db)
        .city("Lisbon")
        .coordinates(38.8000, -9.1390)
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db)
        .city("Porto")
        .coordinates(38.7230, -9.1390)
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let candidates = repo
        .find_near_candidates("Lisbon", 38.7223, -9.1393, 0.005, None)
        .await?;

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, near.id);

    Ok(())
}

/// Tests that the hotel being updated is excluded from its own candidate set.
///
/// Expected: Ok with an empty candidate list
#[tokio::test]
async fn excludes_the_given_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .city("Lisbon")
        .coordinates(38.7223, -9.1393)
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let candidates = repo
        .find_near_candidates("Lisbon", 38.7223, -9.1393, 0.005, Some(hotel.id))
        .await?;

    assert!(candidates.is_empty());

    Ok(())
}
