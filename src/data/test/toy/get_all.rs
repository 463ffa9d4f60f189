use super::*;

/// Tests that the full collection comes back ordered by name.
///
/// Expected: Ok with every toy, alphabetical
#[tokio::test]
async fn returns_every_toy_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Toy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Delta", "Alpha", "Charlie", "Bravo", "Echo"] {
        factory::toy::ToyFactory::new(db).name(name).build().await?;
    }

    let toys = ToyRepository::new(db).get_all().await?;

    let names: Vec<&str> = toys.iter().map(|toy| toy.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie", "Delta", "Echo"]);
    Ok(())
}

/// Tests the empty collection.
///
/// Expected: Ok with no toys
#[tokio::test]
async fn empty_collection_is_an_empty_vec() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Toy).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let toys = ToyRepository::new(db).get_all().await?;

    assert!(toys.is_empty());
    Ok(())
}
