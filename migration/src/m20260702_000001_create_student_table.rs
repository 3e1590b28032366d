use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::IdStudent))
                    .col(string(Student::Name))
                    .col(string_null(Student::Lastname))
                    .col(date_null(Student::Birthdate))
                    .col(string_len_null(Student::Cpf, 14).unique_key())
                    .col(string_len_null(Student::Gender, 24))
                    .col(string(Student::Email).unique_key())
                    .col(timestamp_with_time_zone(Student::RegisterDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    IdStudent,
    Name,
    Lastname,
    Birthdate,
    Cpf,
    Gender,
    Email,
    RegisterDate,
}
