use super::*;

/// Tests a partial hotel update.
///
/// Expected: Ok with provided fields changed, other fields and the derived
/// metrics untouched
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .name("Hotel Mar Azul")
        .stars(4.2)
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let updated = repo
        .update(
            hotel.id,
            UpdateHotelParams {
                name: Some("Hotel Mar Azul & Spa".to_string()),
                neighborhood: Some("Baixa".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.name, "Hotel Mar Azul & Spa");
    assert_eq!(updated.neighborhood.as_deref(), Some("Baixa"));
    assert_eq!(updated.city, hotel.city);
    assert_eq!(updated.stars, 4.2);

    Ok(())
}

/// Tests updating a hotel that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = HotelRepository::new(db);
    let result = repo.update(999, UpdateHotelParams::default()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
