use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::drone::DroneRepository,
    model::{drone::DroneListFilter, page::PageRequest},
};

fn full_page() -> PageRequest {
    PageRequest {
        limit: 8,
        offset: 0,
    }
}

mod get_by_id;
mod get_page;
