//! SeaORM repository implementations

use super::entity::{case, case_client, document, hearing};
use super::mapper::CaseRow;
use crate::contract::{Case, CaseStatus, Document, DocumentType, Hearing, HearingStatus};
use crate::domain::repository::{
    CaseRepository, DocumentRepository, HearingRepository, StoreResult,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use svckit::search::folded_contains;
use svckit::StoreError;

// ===== Case Repository =====

pub struct SeaOrmCaseRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Attach linked client ids to a batch of case rows
    async fn with_clients<C: ConnectionTrait>(
        conn: &C,
        rows: Vec<case::Model>,
    ) -> StoreResult<Vec<Case>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let links = case_client::Entity::find()
            .filter(case_client::Column::CaseId.is_in(ids))
            .all(conn)
            .await?;

        let mut by_case: HashMap<i64, Vec<i64>> = HashMap::new();
        for link in links {
            by_case.entry(link.case_id).or_default().push(link.client_id);
        }

        rows.into_iter()
            .map(|row| {
                let clients = by_case.remove(&row.id).unwrap_or_default();
                Case::try_from(CaseRow(row, clients)).map_err(StoreError::from)
            })
            .collect()
    }

    async fn one_with_clients<C: ConnectionTrait>(
        conn: &C,
        row: Option<case::Model>,
    ) -> StoreResult<Option<Case>> {
        match row {
            Some(row) => Ok(Self::with_clients(conn, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn insert_links<C: ConnectionTrait>(
        conn: &C,
        case_id: i64,
        client_ids: &[i64],
    ) -> StoreResult<()> {
        if client_ids.is_empty() {
            return Ok(());
        }
        let links = client_ids.iter().map(|&client_id| case_client::ActiveModel {
            case_id: sea_orm::ActiveValue::Set(case_id),
            client_id: sea_orm::ActiveValue::Set(client_id),
        });
        case_client::Entity::insert_many(links)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CaseRepository for SeaOrmCaseRepository {
    async fn insert(&self, case: &Case) -> StoreResult<Case> {
        let txn = self.db.begin().await?;

        let mut active = case::ActiveModel::from(case);
        active.id = sea_orm::ActiveValue::NotSet;
        let row = active.insert(&txn).await?;
        Self::insert_links(&txn, row.id, &case.client_ids).await?;

        let created = Case::try_from(CaseRow(row, case.client_ids.clone()))?;
        txn.commit().await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Case>> {
        let row = case::Entity::find_by_id(id).one(&*self.db).await?;
        Self::one_with_clients(&*self.db, row).await
    }

    async fn find_by_number(&self, case_number: &str) -> StoreResult<Option<Case>> {
        let row = case::Entity::find()
            .filter(case::Column::CaseNumber.eq(case_number))
            .one(&*self.db)
            .await?;
        Self::one_with_clients(&*self.db, row).await
    }

    async fn list_all(&self) -> StoreResult<Vec<Case>> {
        let rows = case::Entity::find()
            .order_by_asc(case::Column::Id)
            .all(&*self.db)
            .await?;
        Self::with_clients(&*self.db, rows).await
    }

    async fn list_by_client(&self, client_id: i64) -> StoreResult<Vec<Case>> {
        let rows = case::Entity::find()
            .inner_join(case_client::Entity)
            .filter(case_client::Column::ClientId.eq(client_id))
            .order_by_asc(case::Column::Id)
            .all(&*self.db)
            .await?;
        Self::with_clients(&*self.db, rows).await
    }

    async fn list_by_status(&self, status: CaseStatus) -> StoreResult<Vec<Case>> {
        let rows = case::Entity::find()
            .filter(case::Column::Status.eq(status.as_str()))
            .order_by_asc(case::Column::Id)
            .all(&*self.db)
            .await?;
        Self::with_clients(&*self.db, rows).await
    }

    async fn list_by_assigned_user(&self, user_id: i64) -> StoreResult<Vec<Case>> {
        let rows = case::Entity::find()
            .filter(case::Column::AssignedUserId.eq(user_id))
            .order_by_asc(case::Column::Id)
            .all(&*self.db)
            .await?;
        Self::with_clients(&*self.db, rows).await
    }

    async fn search(&self, term: &str) -> StoreResult<Vec<Case>> {
        let rows = case::Entity::find()
            .filter(
                Condition::any()
                    .add(folded_contains(
                        (case::Entity, case::Column::TitleFolded),
                        term,
                    ))
                    .add(folded_contains(
                        (case::Entity, case::Column::CaseNumberFolded),
                        term,
                    )),
            )
            .order_by_asc(case::Column::Id)
            .all(&*self.db)
            .await?;
        Self::with_clients(&*self.db, rows).await
    }

    async fn update(&self, case: &Case) -> StoreResult<Case> {
        let txn = self.db.begin().await?;

        let row = case::ActiveModel::from(case).update(&txn).await?;
        case_client::Entity::delete_many()
            .filter(case_client::Column::CaseId.eq(case.id))
            .exec(&txn)
            .await?;
        Self::insert_links(&txn, case.id, &case.client_ids).await?;

        let updated = Case::try_from(CaseRow(row, case.client_ids.clone()))?;
        txn.commit().await?;
        Ok(updated)
    }

    async fn link_client(&self, case_id: i64, client_id: i64) -> StoreResult<bool> {
        let existing = case_client::Entity::find_by_id((case_id, client_id))
            .one(&*self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }
        match Self::insert_links(&*self.db, case_id, &[client_id]).await {
            Ok(()) => Ok(true),
            // Lost a race with a concurrent link of the same pair
            Err(StoreError::UniqueViolation(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn unlink_client(&self, case_id: i64, client_id: i64) -> StoreResult<bool> {
        let res = case_client::Entity::delete_by_id((case_id, client_id))
            .exec(&*self.db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_cascade(&self, id: i64) -> StoreResult<bool> {
        let txn = self.db.begin().await?;

        if case::Entity::find_by_id(id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Ok(false);
        }

        case_client::Entity::delete_many()
            .filter(case_client::Column::CaseId.eq(id))
            .exec(&txn)
            .await?;
        hearing::Entity::delete_many()
            .filter(hearing::Column::CaseId.eq(id))
            .exec(&txn)
            .await?;
        document::Entity::delete_many()
            .filter(document::Column::CaseId.eq(id))
            .exec(&txn)
            .await?;
        let res = case::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, id: i64) -> StoreResult<bool> {
        let count = case::Entity::find_by_id(id).count(&*self.db).await?;
        Ok(count > 0)
    }
}

// ===== Hearing Repository =====

pub struct SeaOrmHearingRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmHearingRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn hearings(rows: Vec<hearing::Model>) -> StoreResult<Vec<Hearing>> {
    rows.into_iter()
        .map(|row| Hearing::try_from(row).map_err(StoreError::from))
        .collect()
}

#[async_trait]
impl HearingRepository for SeaOrmHearingRepository {
    async fn insert(&self, hearing: &Hearing) -> StoreResult<Hearing> {
        let mut active = hearing::ActiveModel::from(hearing);
        active.id = sea_orm::ActiveValue::NotSet;
        let row = active.insert(&*self.db).await?;
        Ok(Hearing::try_from(row)?)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Hearing>> {
        hearing::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(Hearing::try_from)
            .transpose()
            .map_err(StoreError::from)
    }

    async fn list_all(&self) -> StoreResult<Vec<Hearing>> {
        hearings(
            hearing::Entity::find()
                .order_by_asc(hearing::Column::Id)
                .all(&*self.db)
                .await?,
        )
    }

    async fn list_by_case(&self, case_id: i64) -> StoreResult<Vec<Hearing>> {
        hearings(
            hearing::Entity::find()
                .filter(hearing::Column::CaseId.eq(case_id))
                .order_by_asc(hearing::Column::ScheduledDate)
                .all(&*self.db)
                .await?,
        )
    }

    async fn list_by_status(&self, status: HearingStatus) -> StoreResult<Vec<Hearing>> {
        hearings(
            hearing::Entity::find()
                .filter(hearing::Column::Status.eq(status.as_str()))
                .order_by_asc(hearing::Column::ScheduledDate)
                .all(&*self.db)
                .await?,
        )
    }

    async fn list_scheduled_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> StoreResult<Vec<Hearing>> {
        hearings(
            hearing::Entity::find()
                .filter(hearing::Column::ScheduledDate.between(from, to))
                .order_by_asc(hearing::Column::ScheduledDate)
                .all(&*self.db)
                .await?,
        )
    }

    async fn update(&self, hearing: &Hearing) -> StoreResult<Hearing> {
        let row = hearing::ActiveModel::from(hearing)
            .update(&*self.db)
            .await?;
        Ok(Hearing::try_from(row)?)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let res = hearing::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(res.rows_affected > 0)
    }
}

// ===== Document Repository =====

pub struct SeaOrmDocumentRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmDocumentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn documents(rows: Vec<document::Model>) -> StoreResult<Vec<Document>> {
    rows.into_iter()
        .map(|row| Document::try_from(row).map_err(StoreError::from))
        .collect()
}

#[async_trait]
impl DocumentRepository for SeaOrmDocumentRepository {
    async fn insert(&self, document: &Document) -> StoreResult<Document> {
        let mut active = document::ActiveModel::from(document);
        active.id = sea_orm::ActiveValue::NotSet;
        let row = active.insert(&*self.db).await?;
        Ok(Document::try_from(row)?)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Document>> {
        document::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .map(Document::try_from)
            .transpose()
            .map_err(StoreError::from)
    }

    async fn list_all(&self) -> StoreResult<Vec<Document>> {
        documents(
            document::Entity::find()
                .order_by_asc(document::Column::Id)
                .all(&*self.db)
                .await?,
        )
    }

    async fn list_by_case(&self, case_id: i64) -> StoreResult<Vec<Document>> {
        documents(
            document::Entity::find()
                .filter(document::Column::CaseId.eq(case_id))
                .order_by_asc(document::Column::Id)
                .all(&*self.db)
                .await?,
        )
    }

    async fn list_by_type(&self, document_type: DocumentType) -> StoreResult<Vec<Document>> {
        documents(
            document::Entity::find()
                .filter(document::Column::DocumentType.eq(document_type.as_str()))
                .order_by_asc(document::Column::Id)
                .all(&*self.db)
                .await?,
        )
    }

    async fn update(&self, document: &Document) -> StoreResult<Document> {
        let row = document::ActiveModel::from(document)
            .update(&*self.db)
            .await?;
        Ok(Document::try_from(row)?)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let res = document::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
