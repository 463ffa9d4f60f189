use super::*;

/// Tests deleting an existing toy.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_toy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Toy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let toy = factory::toy::create_toy(db).await?;

    let repo = ToyRepository::new(db);

    assert!(repo.delete(toy.id).await?);
    assert_eq!(repo.get_by_id(toy.id).await?, None);
    Ok(())
}

/// Tests that deleting the same toy twice reports the second attempt as a
/// no-op, which the handler maps to 404.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn second_delete_reports_nothing_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Toy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let toy = factory::toy::create_toy(db).await?;

    let repo = ToyRepository::new(db);

    assert!(repo.delete(toy.id).await?);
    assert!(!repo.delete(toy.id).await?);
    Ok(())
}
