use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    data::drone_category::CategoryRepository,
    model::{drone_category::CategoryListFilter, page::PageRequest},
};

mod delete;
mod get_by_id;
mod get_page;
