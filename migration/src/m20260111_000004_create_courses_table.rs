use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000003_create_instructors_table::Instructors;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(pk_auto(Courses::Id))
                    .col(string(Courses::Title))
                    .col(string_uniq(Courses::CourseCode))
                    .col(string(Courses::Description))
                    .col(integer(Courses::CreditHours))
                    .col(integer(Courses::MaxCapacity))
                    .col(integer(Courses::InstructorId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_courses_instructor_id")
                            .from(Courses::Table, Courses::InstructorId)
                            .to(Instructors::Table, Instructors::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Courses {
    Table,
    Id,
    Title,
    CourseCode,
    Description,
    CreditHours,
    MaxCapacity,
    InstructorId,
}
