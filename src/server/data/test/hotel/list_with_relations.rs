use super::*;

/// Tests the bulk aggregate load behind the search pipeline.
///
/// Two hotels each get their own rooms, media, and amenities; the loaders
/// must keep every relation aligned with its own hotel.
///
/// Expected: Ok with aggregates in id order and relations not crossed
#[tokio::test]
async fn loads_aggregates_aligned_per_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::hotel::create_hotel(db).await?;
    let second = factory::hotel::create_hotel(db).await?;

    factory::room::create_room(db, first.id).await?;
    factory::room::create_room(db, first.id).await?;
    factory::room::create_room(db, second.id).await?;

    factory::media::create_media(db, second.id).await?;

    let wifi = factory::amenity::create_amenity_with_code(db, "wifi").await?;
    factory::amenity::attach_to_hotel(db, first.id, wifi.id).await?;

    let repo = HotelRepository::new(db);
    let aggregates = repo.list_with_relations().await?;

    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates[0].hotel.id, first.id);
    assert_eq!(aggregates[1].hotel.id, second.id);

    assert_eq!(aggregates[0].rooms.len(), 2);
    assert!(aggregates[0].media.is_empty());
    assert_eq!(aggregates[0].amenities.len(), 1);
    assert_eq!(aggregates[0].amenities[0].code, "wifi");

    assert_eq!(aggregates[1].rooms.len(), 1);
    assert_eq!(aggregates[1].media.len(), 1);
    assert!(aggregates[1].amenities.is_empty());

    Ok(())
}

/// Tests that media comes back in id order, since the first item is used as
/// the search thumbnail.
///
/// Expected: media ids ascending in both bulk and single loads
#[tokio::test]
async fn media_is_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let first = factory::media::create_media_with_url(db, hotel.id, "https://img.example.com/cover.jpg").await?;
    let second = factory::media::create_media(db, hotel.id).await?;
    assert!(first.id < second.id);

    let repo = HotelRepository::new(db);

    let aggregates = repo.list_with_relations().await?;
    let ids: Vec<i32> = aggregates[0].media.iter().map(|media| media.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(aggregates[0].media[0].url, "https://img.example.com/cover.jpg");

    let single = repo.get_with_relations(hotel.id).await?.unwrap();
    assert_eq!(single.media[0].id, first.id);

    Ok(())
}

/// Tests fetching a single aggregate by id.
///
/// Expected: Ok(Some) for a stored hotel, Ok(None) otherwise
#[tokio::test]
async fn gets_single_aggregate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    factory::room::create_room(db, hotel.id).await?;

    let repo = HotelRepository::new(db);

    let aggregate = repo.get_with_relations(hotel.id).await?.unwrap();
    assert_eq!(aggregate.hotel.id, hotel.id);
    assert_eq!(aggregate.rooms.len(), 1);

    assert!(repo.get_with_relations(hotel.id + 100).await?.is_none());

    Ok(())
}
