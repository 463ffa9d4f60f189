//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let toy = factory::create_toy(&db).await?;
//!     let category = factory::create_category(&db).await?;
//!
//!     // Create with all dependencies
//!     let (pilot, category, drone, competition) =
//!         factory::helpers::create_competition_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::toy::ToyFactory;
//!
//! let toy = ToyFactory::new(&db)
//!     .name("Hawaiian Barbie")
//!     .toy_category("Dolls")
//!     .was_included_in_home(true)
//!     .build()
//!     .await?;
//! ```

pub mod competition;
pub mod drone;
pub mod drone_category;
pub mod helpers;
pub mod pilot;
pub mod toy;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use competition::create_competition;
pub use drone::create_drone;
pub use drone_category::create_category;
pub use pilot::create_pilot;
pub use toy::create_toy;
pub use user::{create_token_for_user, create_user};
