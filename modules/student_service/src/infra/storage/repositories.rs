//! SeaORM repository implementations

use crate::contract::{Group, Student};
use crate::domain::repository::{GroupRepository, StudentRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::entity;
use super::mapper;

// ===== Group Repository =====

pub struct SeaOrmGroupRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmGroupRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupRepository for SeaOrmGroupRepository {
    async fn exists_by_title(&self, title: &str) -> Result<bool> {
        let count = entity::grooup::Entity::find()
            .filter(entity::grooup::Column::Title.eq(title))
            .count(&*self.db)
            .await?;

        Ok(count > 0)
    }

    async fn list_all(&self) -> Result<Vec<Group>> {
        let groups = entity::grooup::Entity::find()
            .order_by_asc(entity::grooup::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(groups.into_iter().map(|g| g.into()).collect())
    }
}

// ===== Student Repository =====

pub struct SeaOrmStudentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmStudentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Resolve the group rows referenced by `rows` and assemble contract
    /// students, preserving the row order of the query.
    async fn assemble(
        &self,
        rows: Vec<(entity::Model, Option<entity::record_book::Model>)>,
    ) -> Result<Vec<Student>> {
        let group_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(student, _)| student.group_id)
            .collect();

        let groups: HashMap<i32, Group> = if group_ids.is_empty() {
            HashMap::new()
        } else {
            entity::grooup::Entity::find()
                .filter(entity::grooup::Column::Id.is_in(group_ids))
                .all(&*self.db)
                .await?
                .into_iter()
                .map(|g| (g.id, g.into()))
                .collect()
        };

        rows.into_iter()
            .map(|(student, record_book)| {
                let group = student.group_id.and_then(|id| groups.get(&id).cloned());
                mapper::student_from_parts(student, record_book, group)
            })
            .collect()
    }
}

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_by_group_title(&self, title: &str) -> Result<Vec<Student>> {
        let rows = entity::Entity::find()
            .find_also_related(entity::record_book::Entity)
            .join(JoinType::InnerJoin, entity::Relation::Grooup.def())
            .filter(entity::grooup::Column::Title.eq(title))
            .all(&*self.db)
            .await?;

        self.assemble(rows).await
    }

    async fn list_by_rating_desc(&self, offset: u64, limit: u64) -> Result<Vec<Student>> {
        let rows = entity::Entity::find()
            .find_also_related(entity::record_book::Entity)
            .order_by_desc(entity::record_book::Column::Rating)
            .offset(offset)
            .limit(limit)
            .all(&*self.db)
            .await?;

        self.assemble(rows).await
    }

    async fn top_by_rating_in_group(&self, group_id: i32, limit: u64) -> Result<Vec<Student>> {
        let rows = entity::Entity::find()
            .find_also_related(entity::record_book::Entity)
            .filter(entity::Column::GroupId.eq(group_id))
            .order_by_desc(entity::record_book::Column::Rating)
            .limit(limit)
            .all(&*self.db)
            .await?;

        self.assemble(rows).await
    }

    async fn average_rating_in_group(&self, group_id: i32) -> Result<Option<f64>> {
        // The cast keeps Postgres from answering with NUMERIC, which does
        // not decode into f64.
        let average: Option<Option<f64>> = entity::Entity::find()
            .select_only()
            .column_as(
                Expr::cust_with_expr(
                    "CAST(AVG($1) AS double precision)",
                    Expr::col((
                        entity::record_book::Entity,
                        entity::record_book::Column::Rating,
                    )),
                ),
                "avg_rating",
            )
            .join(JoinType::InnerJoin, entity::Relation::RecordBook.def())
            .filter(entity::Column::GroupId.eq(group_id))
            .into_tuple()
            .one(&*self.db)
            .await?;

        Ok(average.flatten())
    }

    async fn students_below_rating_in_group(
        &self,
        group_id: i32,
        threshold: f64,
    ) -> Result<Vec<Student>> {
        let rows = entity::Entity::find()
            .find_also_related(entity::record_book::Entity)
            .filter(entity::Column::GroupId.eq(group_id))
            .filter(entity::record_book::Column::Rating.lt(threshold))
            .all(&*self.db)
            .await?;

        self.assemble(rows).await
    }
}
