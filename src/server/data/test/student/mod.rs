use crate::server::{
    data::student::StudentRepository,
    model::student::{
        CreateLocationParam, CreateStudentParam, EnrollmentParam, UpdateLocationParam,
        UpdateStudentParam,
    },
};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod get_by_id;
mod update;

/// Baseline create parameters used across the tests.
fn create_param(email: &str) -> CreateStudentParam {
    CreateStudentParam {
        name: "Ada".to_string(),
        lastname: Some("Lovelace".to_string()),
        birthdate: NaiveDate::from_ymd_opt(2000, 12, 10),
        cpf: None,
        gender: None,
        email: email.to_string(),
        location: CreateLocationParam {
            postal_code: "01000-000".to_string(),
            country: "Brazil".to_string(),
            street: Some("Main Street".to_string()),
            district: None,
            number: 42,
            complement: None,
            city: Some("Sao Paulo".to_string()),
            state: Some("SP".to_string()),
        },
        courses: Vec::new(),
    }
}

/// Update parameters with nothing set.
fn empty_update() -> UpdateStudentParam {
    UpdateStudentParam {
        name: None,
        lastname: None,
        birthdate: None,
        cpf: None,
        gender: None,
        email: None,
        location: None,
        courses: None,
    }
}
