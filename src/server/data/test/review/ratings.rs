use super::*;

/// Tests the raw rating projection feeding the stars metric.
///
/// Expected: Ok with only the hotel's own ratings
#[tokio::test]
async fn lists_ratings_for_one_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let other_hotel = factory::hotel::create_hotel(db).await?;
    let user = factory::user::create_user(db).await?;

    factory::review::create_review(db, hotel.id, &user.id, 4.0).await?;
    factory::review::create_review(db, hotel.id, &user.id, 5.0).await?;
    factory::review::create_review(db, other_hotel.id, &user.id, 1.0).await?;

    let repo = ReviewRepository::new(db);

    let mut ratings = repo.list_ratings_for_hotel(hotel.id).await?;
    ratings.sort_by(f64::total_cmp);
    assert_eq!(ratings, vec![4.0, 5.0]);

    assert_eq!(repo.count_for_hotel(hotel.id).await?, 2);
    assert_eq!(repo.count_for_hotel(other_hotel.id).await?, 1);

    Ok(())
}

/// Tests the rating projection for a hotel with no reviews.
///
/// Expected: Ok with an empty list and a zero count
#[tokio::test]
async fn unreviewed_hotel_has_no_ratings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.list_ratings_for_hotel(hotel.id).await?.is_empty());
    assert_eq!(repo.count_for_hotel(hotel.id).await?, 0);

    Ok(())
}
