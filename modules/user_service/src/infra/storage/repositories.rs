//! SeaORM repository implementations

use super::entity::{user, user_role};
use super::mapper::{role_rows, UserRow};
use crate::contract::User;
use crate::domain::repository::{StoreResult, UserRepository};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

pub struct SeaOrmUserRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Attach role names to a batch of user rows
    async fn with_roles<C: ConnectionTrait>(
        conn: &C,
        rows: Vec<user::Model>,
    ) -> StoreResult<Vec<User>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut by_user: HashMap<i64, Vec<String>> = HashMap::new();
        for role in user_role::Entity::find()
            .filter(user_role::Column::UserId.is_in(ids))
            .all(conn)
            .await?
        {
            by_user.entry(role.user_id).or_default().push(role.role);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let roles = by_user.remove(&row.id).unwrap_or_default();
                User::from(UserRow(row, roles))
            })
            .collect())
    }

    async fn one(&self, query: Select<user::Entity>) -> StoreResult<Option<User>> {
        match query.one(&*self.db).await? {
            Some(row) => Ok(Self::with_roles(&*self.db, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn insert_roles<C: ConnectionTrait>(conn: &C, user_id: i64, user: &User) -> StoreResult<()> {
        let rows = role_rows(user_id, user);
        if rows.is_empty() {
            return Ok(());
        }
        user_role::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    async fn taken(
        &self,
        column: user::Column,
        value: &str,
        exclude_id: Option<i64>,
    ) -> StoreResult<bool> {
        let mut query = user::Entity::find().filter(column.eq(value));
        if let Some(id) = exclude_id {
            query = query.filter(user::Column::Id.ne(id));
        }
        Ok(query.count(&*self.db).await? > 0)
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn insert(&self, user: &User) -> StoreResult<User> {
        let txn = self.db.begin().await?;

        let mut active = user::ActiveModel::from(user);
        active.id = sea_orm::ActiveValue::NotSet;
        let row = active.insert(&txn).await?;
        Self::insert_roles(&txn, row.id, user).await?;

        txn.commit().await?;
        let roles = user.roles.iter().cloned().collect();
        Ok(UserRow(row, roles).into())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        self.one(user::Entity::find_by_id(id)).await
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        self.one(user::Entity::find().filter(user::Column::Username.eq(username)))
            .await
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        let rows = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&*self.db)
            .await?;
        Self::with_roles(&*self.db, rows).await
    }

    async fn exists_by_username(
        &self,
        username: &str,
        exclude_id: Option<i64>,
    ) -> StoreResult<bool> {
        self.taken(user::Column::Username, username, exclude_id).await
    }

    async fn exists_by_email(&self, email: &str, exclude_id: Option<i64>) -> StoreResult<bool> {
        self.taken(user::Column::Email, email, exclude_id).await
    }

    async fn update(&self, user: &User) -> StoreResult<User> {
        let txn = self.db.begin().await?;

        let row = user::ActiveModel::from(user).update(&txn).await?;
        user_role::Entity::delete_many()
            .filter(user_role::Column::UserId.eq(user.id))
            .exec(&txn)
            .await?;
        Self::insert_roles(&txn, user.id, user).await?;

        txn.commit().await?;
        let roles = user.roles.iter().cloned().collect();
        Ok(UserRow(row, roles).into())
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let txn = self.db.begin().await?;
        user_role::Entity::delete_many()
            .filter(user_role::Column::UserId.eq(id))
            .exec(&txn)
            .await?;
        let res = user::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }
}
