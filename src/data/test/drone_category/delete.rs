use sea_orm::EntityTrait;

use super::*;

/// Tests that deleting a category cascades to its drones.
///
/// Expected: Ok(true) and the drone row is gone too
#[tokio::test]
async fn delete_cascades_to_drones() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::drone_category::create_category(db).await?;
    let drone = factory::drone::create_drone(db, category.id).await?;

    assert!(CategoryRepository::new(db).delete(category.id).await?);

    let remaining = entity::prelude::Drone::find_by_id(drone.id).one(db).await?;
    assert!(remaining.is_none());
    Ok(())
}
