use crate::server::data::student_course::StudentCourseRepository;
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod get_by_keys;
mod update;
