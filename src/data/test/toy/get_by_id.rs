use super::*;

/// Tests fetching a toy that exists.
///
/// Expected: Ok with Some(toy)
#[tokio::test]
async fn finds_existing_toy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Toy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::toy::create_toy(db).await?;

    let found = ToyRepository::new(db).get_by_id(created.id).await?;

    assert_eq!(found, Some(created));
    Ok(())
}

/// Tests fetching an ID with no row behind it.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Toy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = ToyRepository::new(db).get_by_id(12345).await?;

    assert_eq!(found, None);
    Ok(())
}
