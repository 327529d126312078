use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Instructors::Table)
                    .if_not_exists()
                    .col(pk_auto(Instructors::Id))
                    .col(string(Instructors::Name))
                    .col(string(Instructors::Specialty))
                    .col(integer_uniq(Instructors::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_instructors_user_id")
                            .from(Instructors::Table, Instructors::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Instructors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Instructors {
    Table,
    Id,
    Name,
    Specialty,
    UserId,
}
