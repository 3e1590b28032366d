use sea_orm_migration::{prelude::*, schema::*};

use super::m20260702_000001_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Location::Table)
                    .if_not_exists()
                    .col(pk_auto(Location::IdLocation))
                    .col(string_len(Location::PostalCode, 9))
                    .col(string_len(Location::Country, 55))
                    .col(string_null(Location::Street))
                    .col(string_null(Location::District))
                    .col(integer(Location::Number))
                    .col(string_len_null(Location::Complement, 100))
                    .col(string_null(Location::City))
                    .col(string_len_null(Location::State, 100))
                    .col(integer(Location::StudentFk))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_student_fk")
                            .from(Location::Table, Location::StudentFk)
                            .to(Student::Table, Student::IdStudent)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_location_student_unique")
                            .col(Location::StudentFk),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Location::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Location {
    Table,
    IdLocation,
    PostalCode,
    Country,
    Street,
    District,
    Number,
    Complement,
    City,
    State,
    StudentFk,
}
