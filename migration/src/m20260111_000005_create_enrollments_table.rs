use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000002_create_students_table::Students,
    m20260111_000004_create_courses_table::Courses,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollments::Id))
                    .col(integer(Enrollments::StudentId))
                    .col(integer(Enrollments::CourseId))
                    .col(string_null(Enrollments::Grade))
                    .col(string(Enrollments::Semester))
                    .col(
                        timestamp_with_time_zone(Enrollments::EnrollmentDate)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(Enrollments::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_student_id")
                            .from(Enrollments::Table, Enrollments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_course_id")
                            .from(Enrollments::Table, Enrollments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One enrollment per student, course and semester.
        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_student_course_semester")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentId)
                    .col(Enrollments::CourseId)
                    .col(Enrollments::Semester)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollments {
    Table,
    Id,
    StudentId,
    CourseId,
    Grade,
    Semester,
    EnrollmentDate,
    Status,
}
