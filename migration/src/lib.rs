pub use sea_orm_migration::prelude::*;

mod m20260820_000001_create_user_table;
mod m20260820_000002_create_api_token_table;
mod m20260820_000003_create_toy_table;
mod m20260820_000004_create_drone_category_table;
mod m20260820_000005_create_drone_table;
mod m20260820_000006_create_pilot_table;
mod m20260820_000007_create_competition_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260820_000001_create_user_table::Migration),
            Box::new(m20260820_000002_create_api_token_table::Migration),
            Box::new(m20260820_000003_create_toy_table::Migration),
            Box::new(m20260820_000004_create_drone_category_table::Migration),
            Box::new(m20260820_000005_create_drone_table::Migration),
            Box::new(m20260820_000006_create_pilot_table::Migration),
            Box::new(m20260820_000007_create_competition_table::Migration),
        ]
    }
}
