use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_location: i32,
    pub postal_code: String,
    pub country: String,
    pub street: Option<String>,
    pub district: Option<String>,
    pub number: i32,
    pub complement: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[sea_orm(unique)]
    pub student_fk: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentFk",
        to = "super::student::Column::IdStudent",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
