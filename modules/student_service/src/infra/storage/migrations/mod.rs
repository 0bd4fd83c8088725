//! Database migrations for the student registry

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250115_000001_create_grooup::Migration),
            Box::new(m20250115_000002_create_record_book::Migration),
            Box::new(m20250115_000003_create_student::Migration),
        ]
    }
}

mod m20250115_000001_create_grooup {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Grooup::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Grooup::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Grooup::Title).string_len(20).not_null())
                        .col(ColumnDef::new(Grooup::Room).integer().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_grooup_title")
                        .table(Grooup::Table)
                        .col(Grooup::Title)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Grooup::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Grooup {
        Table,
        Id,
        Title,
        Room,
    }
}

mod m20250115_000002_create_record_book {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(RecordBook::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(RecordBook::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(RecordBook::Rating).integer().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(RecordBook::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum RecordBook {
        Table,
        Id,
        Rating,
    }
}

mod m20250115_000003_create_student {
    use super::*;

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
                        .col(
                            ColumnDef::new(Student::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Student::Name).string_len(50).not_null())
                        .col(ColumnDef::new(Student::Age).integer().not_null())
                        .col(ColumnDef::new(Student::RecordBookId).integer().not_null())
                        .col(ColumnDef::new(Student::GroupId).integer())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_student_record_book")
                                .from(Student::Table, Student::RecordBookId)
                                .to(RecordBook::Table, RecordBook::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_student_grooup")
                                .from(Student::Table, Student::GroupId)
                                .to(Grooup::Table, Grooup::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // A record book is owned by exactly one student
            manager
                .create_index(
                    Index::create()
                        .name("idx_student_record_book_id")
                        .table(Student::Table)
                        .col(Student::RecordBookId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_student_group_id")
                        .table(Student::Table)
                        .col(Student::GroupId)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Student::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Student {
        Table,
        Id,
        Name,
        Age,
        RecordBookId,
        GroupId,
    }

    #[derive(DeriveIden)]
    enum RecordBook {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Grooup {
        Table,
        Id,
    }
}
