use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::pilot::PilotRepository,
    model::{page::PageRequest, pilot::PilotListFilter},
};

mod get_by_id;
mod get_page;
