use super::*;
use crate::server::data::hotel::HotelRepository;
use test_utils::factory::{booking::BookingFactory, helpers::create_booking_dependencies};

/// Tests the derived metrics after reviews and a recent booking.
///
/// Two ratings of 4.0 and 4.5 average to 4.25, rounded to 4.3. Popularity is
/// 0.5 * 1 recent booking + 0.3 * 2 reviews + 0.2 * 4.3 = 1.96, rounded to 2.0.
///
/// Expected: stars 4.3, popularity 2.0
#[tokio::test]
async fn blends_reviews_and_recent_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_booking_dependencies(db).await?;

    factory::review::create_review(db, hotel.id, &user.id, 4.0).await?;
    factory::review::create_review(db, hotel.id, &user.id, 4.5).await?;
    factory::booking::create_booking(db, &user.id, hotel.id, room.id).await?;

    MetricsService::new(db).recompute(hotel.id).await?;

    let stored = HotelRepository::new(db)
        .get_by_id(hotel.id)
        .await?
        .unwrap();

    assert_eq!(stored.stars, 4.3);
    assert_eq!(stored.popularity, 2.0);

    Ok(())
}

/// Tests that bookings older than the recency window do not count and that a
/// hotel with no reviews keeps zero stars.
///
/// Expected: stars 0.0, popularity 0.0
#[tokio::test]
async fn stale_bookings_do_not_move_popularity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_booking_dependencies(db).await?;

    BookingFactory::new(db, &user.id, hotel.id, room.id)
        .created_at(chrono::Utc::now() - chrono::Duration::days(40))
        .build()
        .await?;

    MetricsService::new(db).recompute(hotel.id).await?;

    let stored = HotelRepository::new(db)
        .get_by_id(hotel.id)
        .await?
        .unwrap();

    assert_eq!(stored.stars, 0.0);
    assert_eq!(stored.popularity, 0.0);

    Ok(())
}

/// Tests that recomputing is idempotent: a second run with no intervening
/// writes reads the same inputs and persists the same values.
///
/// Expected: identical stars and popularity after both runs
#[tokio::test]
async fn recompute_is_idempotent_without_new_writes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_booking_dependencies(db).await?;

    factory::review::create_review(db, hotel.id, &user.id, 3.5).await?;
    factory::booking::create_booking(db, &user.id, hotel.id, room.id).await?;

    let repo = HotelRepository::new(db);
    let metrics = MetricsService::new(db);

    metrics.recompute(hotel.id).await?;
    let first = repo.get_by_id(hotel.id).await?.unwrap();

    metrics.recompute(hotel.id).await?;
    let second = repo.get_by_id(hotel.id).await?.unwrap();

    assert_eq!(first.stars, second.stars);
    assert_eq!(first.popularity, second.popularity);

    Ok(())
}

/// Tests recomputing metrics for an id with no hotel behind it.
///
/// Expected: Ok with nothing written
#[tokio::test]
async fn missing_hotel_is_a_silent_no_op() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    MetricsService::new(db).recompute(999).await?;

    Ok(())
}
