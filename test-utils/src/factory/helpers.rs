//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a complete competition hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Pilot
/// 2. Drone category
/// 3. Drone (in the created category)
/// 4. Competition (flown by the pilot with the drone)
///
/// All entities are created with default values. Use the individual factories
/// if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((pilot, category, drone, competition))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_competition_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::pilot::Model,
        entity::drone_category::Model,
        entity::drone::Model,
        entity::competition::Model,
    ),
    DbErr,
> {
    let pilot = crate::factory::pilot::create_pilot(db).await?;
    let category = crate::factory::drone_category::create_category(db).await?;
    let drone = crate::factory::drone::create_drone(db, category.id).await?;
    let competition = crate::factory::competition::create_competition(db, pilot.id, drone.id).await?;

    Ok((pilot, category, drone, competition))
}
