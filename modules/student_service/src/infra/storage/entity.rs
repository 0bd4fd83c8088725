//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Student table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "student")]
pub struct Model {
    /// Surrogate id
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Student name (2-50 chars, enforced at the boundary)
    pub name: String,

    /// Student age (16-62, enforced at the boundary)
    pub age: i32,

    /// Owned record book (one-to-one)
    pub record_book_id: i32,

    /// Owning group (many-to-one, nullable)
    pub group_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Foreign key to grooup
    #[sea_orm(
        belongs_to = "grooup::Entity",
        from = "Column::GroupId",
        to = "grooup::Column::Id"
    )]
    Grooup,
    /// Foreign key to record_book
    #[sea_orm(
        belongs_to = "record_book::Entity",
        from = "Column::RecordBookId",
        to = "record_book::Column::Id"
    )]
    RecordBook,
}

impl Related<grooup::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grooup.def()
    }
}

impl Related<record_book::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecordBook.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Group table module; the table keeps its historical `grooup` spelling
pub mod grooup {
    use sea_orm::entity::prelude::*;

    /// Group table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "grooup")]
    pub struct Model {
        /// Surrogate id
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Group title (2-20 chars, enforced at the boundary)
        pub title: String,

        /// Assigned room (>= 1)
        pub room: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with students
        #[sea_orm(has_many = "super::Entity")]
        Student,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Student.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Record book table module
pub mod record_book {
    use sea_orm::entity::prelude::*;

    /// Record book table entity
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "record_book")]
    pub struct Model {
        /// Surrogate id
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Performance rating (10-100, enforced at the boundary)
        pub rating: i32,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Back-reference to the owning student
        #[sea_orm(has_one = "super::Entity")]
        Student,
    }

    impl Related<super::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Student.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
