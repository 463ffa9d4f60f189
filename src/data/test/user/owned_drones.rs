use sea_orm::ModelTrait;

use super::*;

/// Tests that the ownership relation resolves in both directions: a user's
/// drones through the has_many side and a drone's owner through the
/// belongs_to side.
///
/// Expected: Ok with the drone under its owner and the owner behind the drone
#[tokio::test]
async fn ownership_relation_resolves_both_ways() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let category = factory::drone_category::create_category(db).await?;
    let drone = factory::drone::DroneFactory::new(db, category.id)
        .owner_id(Some(owner.id))
        .build()
        .await?;

    let owned = owner.find_related(entity::prelude::Drone).all(db).await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, drone.id);

    let found_owner = drone.find_related(entity::prelude::User).one(db).await?;
    assert_eq!(found_owner.map(|user| user.id), Some(owner.id));
    Ok(())
}
