use super::*;

/// Tests listing a hotel's reviews with their authors' usernames.
///
/// Expected: Ok with hotel-scoped reviews in id order, each carrying the
/// reviewer's username
#[tokio::test]
async fn joins_author_names_per_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let other_hotel = factory::hotel::create_hotel(db).await?;
    let ana = factory::user::UserFactory::new(db).user_name("ana").build().await?;
    let rui = factory::user::UserFactory::new(db).user_name("rui").build().await?;

    let first = factory::review::create_review(db, hotel.id, &ana.id, 4.0).await?;
    let second = factory::review::create_review(db, hotel.id, &rui.id, 5.0).await?;
    factory::review::create_review(db, other_hotel.id, &ana.id, 2.0).await?;

    let repo = ReviewRepository::new(db);
    let reviews = repo.list_for_hotel_with_authors(hotel.id).await?;

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].review.id, first.id);
    assert_eq!(reviews[0].user_name, "ana");
    assert_eq!(reviews[1].review.id, second.id);
    assert_eq!(reviews[1].user_name, "rui");

    Ok(())
}
