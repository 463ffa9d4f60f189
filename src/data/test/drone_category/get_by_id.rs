use super::*;

/// Tests fetching a category with its drone ids.
///
/// Expected: Ok with Some and the drone ids attached
#[tokio::test]
async fn finds_category_with_its_drones() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_category(db).await?;
    let drone = factory::drone::create_drone(db, category.id).await?;

    let found = CategoryRepository::new(db)
        .get_by_id(category.id)
        .await?
        .unwrap();

    assert_eq!(found.category.id, category.id);
    assert_eq!(found.drone_ids, vec![drone.id]);
    Ok(())
}

/// Tests fetching an ID with no row behind it.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = CategoryRepository::new(db).get_by_id(999).await?;

    assert!(found.is_none());
    Ok(())
}
