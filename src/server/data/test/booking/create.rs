use super::*;

/// Tests creating a booking.
///
/// Expected: Ok with the booking persisted and stamped with a creation time
#[tokio::test]
async fn creates_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_booking_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let before = Utc::now();
    let booking = repo
        .create(CreateBookingParams {
            user_id: user.id.clone(),
            hotel_id: hotel.id,
            room_id: room.id,
            check_in: date(2026, 9, 1),
            check_out: date(2026, 9, 5),
            rooms_booked: 2,
        })
        .await?;

    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.hotel_id, hotel.id);
    assert_eq!(booking.room_id, room.id);
    assert_eq!(booking.rooms_booked, 2);
    assert!(booking.created_at >= before);

    Ok(())
}

/// Tests that listing a user's bookings returns only their own, most recent
/// stay first.
///
/// Expected: Ok with the caller's bookings in check-in descending order
#[tokio::test]
async fn lists_only_own_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_booking_dependencies(db).await?;
    let other = factory::user::create_user(db).await?;

    let early = BookingFactory::new(db, &user.id, hotel.id, room.id)
        .stay(date(2026, 9, 1), date(2026, 9, 3))
        .build()
        .await?;
    let late = BookingFactory::new(db, &user.id, hotel.id, room.id)
        .stay(date(2026, 10, 1), date(2026, 10, 3))
        .build()
        .await?;
    factory::booking::create_booking(db, &other.id, hotel.id, room.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.list_for_user(&user.id).await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, late.id);
    assert_eq!(bookings[1].id, early.id);

    Ok(())
}
