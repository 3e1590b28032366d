use crate::server::data::course::CourseRepository;
use entity::prelude::Course;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod get_by_id;
mod update;
