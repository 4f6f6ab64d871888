use super::*;

/// Tests creating a hotel with nested rooms, media, and amenity attachments.
///
/// Expected: Ok with the full aggregate created and metrics starting at zero
#[tokio::test]
async fn creates_hotel_with_nested_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let wifi = factory::amenity::create_amenity_with_code(db, "wifi").await?;
    let pool = factory::amenity::create_amenity_with_code(db, "pool").await?;

    let repo = HotelRepository::new(db);
    let mut params = hotel_params("Hotel Mar Azul");
    params.rooms = vec![CreateRoomParams {
        name: "Double Deluxe".to_string(),
        room_type: "double".to_string(),
        capacity: 2,
        base_price: 120.0,
        total_units: 4,
    }];
    params.media = vec![CreateMediaParams {
        url: "https://img.example.com/front.jpg".to_string(),
        kind: "photo".to_string(),
    }];
    params.amenity_ids = vec![wifi.id, pool.id];

    let created = repo.create(params).await?;

    assert_eq!(created.hotel.name, "Hotel Mar Azul");
    assert_eq!(created.hotel.stars, 0.0);
    assert_eq!(created.hotel.popularity, 0.0);
    assert_eq!(created.rooms.len(), 1);
    assert_eq!(created.rooms[0].room_type, "double");
    assert_eq!(created.rooms[0].hotel_id, created.hotel.id);
    assert_eq!(created.media.len(), 1);
    assert_eq!(created.amenities.len(), 2);

    Ok(())
}

/// Tests that attaching an already-attached amenity is a no-op instead of a
/// unique violation.
///
/// Expected: Ok with the amenity listed once
#[tokio::test]
async fn repeated_amenity_attachment_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let amenity = factory::amenity::create_amenity(db).await?;

    let repo = HotelRepository::new(db);
    repo.add_amenities(hotel.id, vec![amenity.id]).await?;
    repo.add_amenities(hotel.id, vec![amenity.id]).await?;

    let amenities = repo.list_amenities(hotel.id).await?;
    assert_eq!(amenities.len(), 1);

    Ok(())
}
