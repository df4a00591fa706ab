//! SeaORM repository implementations

use super::entity;
use crate::contract::{Client, UniqueField};
use crate::domain::repository::{ClientRepository, StoreResult};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};
use std::sync::Arc;
use svckit::search::folded_contains;

pub struct SeaOrmClientRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmClientRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn column_for(field: UniqueField) -> entity::Column {
    match field {
        UniqueField::Email => entity::Column::Email,
        UniqueField::TaxId => entity::Column::TaxId,
        UniqueField::IdentityNumber => entity::Column::IdentityNumber,
    }
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn insert(&self, client: &Client) -> StoreResult<Client> {
        let mut active = entity::ActiveModel::from(client);
        active.id = sea_orm::ActiveValue::NotSet;
        let row = active.insert(&*self.db).await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Client>> {
        let row = entity::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(row.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Client>> {
        let row = entity::Entity::find()
            .filter(entity::Column::Email.eq(email.to_lowercase()))
            .one(&*self.db)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn list_all(&self) -> StoreResult<Vec<Client>> {
        let rows = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_active(&self) -> StoreResult<Vec<Client>> {
        let rows = entity::Entity::find()
            .filter(entity::Column::Active.eq(true))
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search(&self, term: &str) -> StoreResult<Vec<Client>> {
        let rows = entity::Entity::find()
            .filter(
                Condition::any()
                    .add(folded_contains(
                        (entity::Entity, entity::Column::NameFolded),
                        term,
                    ))
                    .add(folded_contains(
                        (entity::Entity, entity::Column::SurnameFolded),
                        term,
                    )),
            )
            .order_by_asc(entity::Column::Surname)
            .order_by_asc(entity::Column::Name)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn exists_by_unique_field(
        &self,
        field: UniqueField,
        value: &str,
        exclude_id: Option<i64>,
    ) -> StoreResult<bool> {
        let mut query = entity::Entity::find().filter(column_for(field).eq(value));
        if let Some(id) = exclude_id {
            query = query.filter(entity::Column::Id.ne(id));
        }
        Ok(query.count(&*self.db).await? > 0)
    }

    async fn update(&self, client: &Client) -> StoreResult<Client> {
        let row = entity::ActiveModel::from(client).update(&*self.db).await?;
        Ok(row.into())
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let res = entity::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
