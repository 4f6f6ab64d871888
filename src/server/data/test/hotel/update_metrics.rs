use super::*;

/// Tests persisting derived metrics onto a hotel.
///
/// Expected: Ok with stars and popularity stored
#[tokio::test]
async fn persists_stars_and_popularity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;

    let repo = HotelRepository::new(db);
    repo.update_metrics(hotel.id, 4.3, 12.7).await?;

    let stored = repo.get_by_id(hotel.id).await?.unwrap();
    assert_eq!(stored.stars, 4.3);
    assert_eq!(stored.popularity, 12.7);

    Ok(())
}

/// Tests writing metrics for a hotel id that does not exist.
///
/// Expected: Ok with no rows changed
#[tokio::test]
async fn missing_hotel_is_a_silent_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;

    let repo = HotelRepository::new(db);
    repo.update_metrics(hotel.id + 100, 4.3, 12.7).await?;

    let stored = repo.get_by_id(hotel.id).await?.unwrap();
    assert_eq!(stored.stars, 0.0);
    assert_eq!(stored.popularity, 0.0);

    Ok(())
}
