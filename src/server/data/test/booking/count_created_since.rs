use super::*;

/// Tests the recency count behind the popularity metric.
///
/// One booking created now and one backdated 40 days; a 30-day window must
/// count only the fresh one.
///
/// Expected: Ok(1)
#[tokio::test]
async fn counts_only_recent_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_booking_dependencies(db).await?;

    BookingFactory::new(db, &user.id, hotel.id, room.id)
        .build()
        .await?;
    BookingFactory::new(db, &user.id, hotel.id, room.id)
        .created_at(Utc::now() - Duration::days(40))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let count = repo
        .count_created_since(hotel.id, Utc::now() - Duration::days(30))
        .await?;

    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the count is scoped to the given hotel.
///
/// Expected: Ok(0) for a hotel with no bookings
#[tokio::test]
async fn is_scoped_per_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_booking_dependencies(db).await?;
    let (other_hotel, _) = create_hotel_with_room(db).await?;

    factory::booking::create_booking(db, &user.id, hotel.id, room.id).await?;

    let repo = BookingRepository::new(db);
    let count = repo
        .count_created_since(other_hotel.id, Utc::now() - Duration::days(30))
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
