use chrono::{TimeZone, Utc};
use entity::prelude::Toy;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::{data::toy::ToyRepository, model::toy::ToyWriteParams};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

fn write_params(name: &str) -> ToyWriteParams {
    ToyWriteParams {
        name: name.to_string(),
        description: format!("{} description", name),
        release_date: Utc.with_ymd_and_hms(2017, 10, 9, 12, 11, 37).unwrap(),
        toy_category: "Action figures".to_string(),
        was_included_in_home: false,
    }
}
