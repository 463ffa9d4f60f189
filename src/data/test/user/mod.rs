use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::user::UserRepository;

mod find_by_token;
mod find_or_create;
mod owned_drones;
