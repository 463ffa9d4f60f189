use super::*;

/// Tests fetching a drone with its category name and owner.
///
/// Expected: Ok with Some and ownership preserved
#[tokio::test]
async fn finds_drone_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::drone_category::create_category(db).await?;
    let drone = factory::drone::DroneFactory::new(db, category.id)
        .owner_id(Some(user.id))
        .build()
        .await?;

    let found = DroneRepository::new(db).get_by_id(drone.id).await?.unwrap();

    assert_eq!(found.drone.id, drone.id);
    assert_eq!(found.drone.owner_id, Some(user.id));
    assert_eq!(found.category_name, category.name);
    Ok(())
}

/// Tests fetching an ID with no row behind it.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = DroneRepository::new(db).get_by_id(999).await?;

    assert!(found.is_none());
    Ok(())
}
