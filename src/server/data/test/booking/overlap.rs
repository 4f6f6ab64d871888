use super::*;

/// Tests the half-open overlap query for one hotel.
///
/// A stay ending on the day another starts does not overlap; a stay crossing
/// into the window does.
///
/// Expected: Ok with only genuinely overlapping bookings
#[tokio::test]
async fn back_to_back_stays_do_not_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_booking_dependencies(db).await?;

    // Ends exactly when the queried window starts.
    BookingFactory::new(db, &user.id, hotel.id, room.id)
        .stay(date(2026, 1, 1), date(2026, 1, 5))
        .build()
        .await?;
    let crossing = BookingFactory::new(db, &user.id, hotel.id, room.id)
        .stay(date(2026, 1, 4), date(2026, 1, 8))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let overlapping = repo
        .list_overlapping_for_hotel(hotel.id, date(2026, 1, 5), date(2026, 1, 10), None)
        .await?;

    assert_eq!(overlapping.len(), 1);
    assert_eq!(overlapping[0].id, crossing.id);

    Ok(())
}

/// Tests that the exclusion id removes the booking being re-validated and
/// that other hotels never leak into the result.
///
/// Expected: Ok with the excluded booking and foreign hotel absent
#[tokio::test]
async fn honors_exclusion_and_hotel_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_booking_dependencies(db).await?;
    let (other_hotel, other_room) = create_hotel_with_room(db).await?;

    let own = BookingFactory::new(db, &user.id, hotel.id, room.id)
        .stay(date(2026, 1, 1), date(2026, 1, 10))
        .build()
        .await?;
    BookingFactory::new(db, &user.id, other_hotel.id, other_room.id)
        .stay(date(2026, 1, 1), date(2026, 1, 10))
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    let without_exclusion = repo
        .list_overlapping_for_hotel(hotel.id, date(2026, 1, 3), date(2026, 1, 6), None)
        .await?;
    assert_eq!(without_exclusion.len(), 1);
    assert_eq!(without_exclusion[0].id, own.id);

    let with_exclusion = repo
        .list_overlapping_for_hotel(hotel.id, date(2026, 1, 3), date(2026, 1, 6), Some(own.id))
        .await?;
    assert!(with_exclusion.is_empty());

    Ok(())
}

/// Tests the bulk overlap query feeding the search pipeline.
///
/// Expected: Ok with overlapping bookings from every hotel
#[tokio::test]
async fn bulk_query_spans_all_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, hotel, room) = create_booking_dependencies(db).await?;
    let (other_hotel, other_room) = create_hotel_with_room(db).await?;

    BookingFactory::new(db, &user.id, hotel.id, room.id)
        .stay(date(2026, 1, 1), date(2026, 1, 10))
        .build()
        .await?;
    BookingFactory::new(db, &user.id, other_hotel.id, other_room.id)
        .stay(date(2026, 1, 1), date(2026, 1, 10))
        .build()
        .await?;
    // Entirely before the window.
    BookingFactory::new(db, &user.id, hotel.id, room.id)
        .stay(date(2025, 12, 1), date(2025, 12, 5))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let overlapping = repo.list_overlapping(date(2026, 1, 3), date(2026, 1, 6)).await?;

    assert_eq!(overlapping.len(), 2);

    Ok(())
}
