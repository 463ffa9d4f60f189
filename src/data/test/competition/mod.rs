use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers};

use crate::{
    data::competition::CompetitionRepository,
    model::{competition::CompetitionListFilter, page::PageRequest},
};

fn full_page() -> PageRequest {
    PageRequest {
        limit: 8,
        offset: 0,
    }
}

mod get_by_id;
mod get_page;
