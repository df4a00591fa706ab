#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Client repository against in-memory SQLite with real migrations

mod common;

use client_service::contract::*;
use client_service::domain::repository::ClientRepository;
use client_service::infra::storage::SeaOrmClientRepository;
use client_service::{ClientServiceModule, Config};
use common::{new_client, StubDirectory};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use svckit::{DbConfig, ServiceModule, StoreError};

async fn setup() -> (Arc<DatabaseConnection>, ClientServiceModule) {
    let db = Arc::new(svckit::db::connect(&DbConfig::in_memory()).await.unwrap());
    let module = ClientServiceModule::with_directory(
        db.clone(),
        Arc::new(StubDirectory::default()),
        Config::default(),
    );
    module.migrate(&db).await.unwrap();
    (db, module)
}

#[tokio::test]
async fn unique_indexes_reject_duplicates() {
    let (db, module) = setup().await;
    let created = module
        .service()
        .create_client(NewClient {
            email: Some("ann@x.com".to_string()),
            tax_id: Some("TX-1".to_string()),
            ..new_client("Ann", "One")
        })
        .await
        .unwrap();

    let repo = SeaOrmClientRepository::new(db);
    let mut twin = created.clone();
    twin.id = 0;
    twin.tax_id = None;
    let err = repo.insert(&twin).await.unwrap_err();
    assert!(matches!(err, StoreError::UniqueViolation(_)), "{err:?}");

    // Two clients without any unique values coexist
    twin.email = None;
    repo.insert(&twin).await.unwrap();
    repo.insert(&twin).await.unwrap();
    assert_eq!(repo.list_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn exists_by_unique_field_excludes_self() {
    let (db, module) = setup().await;
    let ann = module
        .service()
        .create_client(NewClient {
            identity_number: Some("ID-1".to_string()),
            ..new_client("Ann", "One")
        })
        .await
        .unwrap();

    let repo = SeaOrmClientRepository::new(db);
    assert!(repo
        .exists_by_unique_field(UniqueField::IdentityNumber, "ID-1", None)
        .await
        .unwrap());
    assert!(!repo
        .exists_by_unique_field(UniqueField::IdentityNumber, "ID-1", Some(ann.id))
        .await
        .unwrap());
    assert!(!repo
        .exists_by_unique_field(UniqueField::TaxId, "ID-1", None)
        .await
        .unwrap());
}

#[tokio::test]
async fn round_trip_search_and_active_filter() {
    let (_, module) = setup().await;
    let service = module.service();
    let jane = service
        .create_client(NewClient {
            email: Some("Jane@X.com".to_string()),
            address: Some("1 Main St".to_string()),
            notes: Some("Prefers email".to_string()),
            ..new_client("Jane", "Smith")
        })
        .await
        .unwrap();
    service
        .create_client(NewClient {
            active: Some(false),
            ..new_client("John", "SMITH")
        })
        .await
        .unwrap();
    service.create_client(new_client("Ada", "Lovelace")).await.unwrap();

    let fetched = service.get_client(jane.id).await.unwrap();
    assert_eq!(fetched.email.as_deref(), Some("jane@x.com"));
    assert_eq!(fetched.address.as_deref(), Some("1 Main St"));
    assert_eq!(fetched.notes.as_deref(), Some("Prefers email"));

    assert_eq!(service.get_client_by_email("JANE@x.com").await.unwrap().id, jane.id);
    assert_eq!(service.search_clients("smi").await.unwrap().len(), 2);
    assert_eq!(service.search_clients("SMI").await.unwrap().len(), 2);
    assert_eq!(service.list_active_clients().await.unwrap().len(), 2);
}

#[tokio::test]
async fn update_conflict_and_delete() {
    let (_, module) = setup().await;
    let service = module.service();
    let ann = service
        .create_client(NewClient {
            email: Some("ann@x.com".to_string()),
            ..new_client("Ann", "One")
        })
        .await
        .unwrap();
    service
        .create_client(NewClient {
            email: Some("bob@x.com".to_string()),
            ..new_client("Bob", "Two")
        })
        .await
        .unwrap();

    let err = service
        .update_client(
            ann.id,
            ClientPatch {
                email: Some("bob@x.com".to_string()),
                ..ClientPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Conflict { .. }));

    service.delete_client(ann.id).await.unwrap();
    assert!(matches!(
        service.get_client(ann.id).await,
        Err(ClientError::NotFound { .. })
    ));
}

#[tokio::test]
async fn search_treats_like_metacharacters_literally() {
    let (_, module) = setup().await;
    let service = module.service();
    service.create_client(new_client("Jane", "Smith")).await.unwrap();
    service.create_client(new_client("Ahmet", "ÇELİK")).await.unwrap();
    service.create_client(new_client("Émile", "Zola")).await.unwrap();
    let underscored = service
        .create_client(new_client("Max_50%", "Power"))
        .await
        .unwrap();

    assert_eq!(service.search_clients("_").await.unwrap().len(), 1);
    assert_eq!(service.search_clients("%").await.unwrap().len(), 1);
    let hits = service.search_clients("x_50%").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, underscored.id);
    assert!(service.search_clients("\\").await.unwrap().is_empty());
}

#[tokio::test]
async fn search_folds_non_ascii_case() {
    let (_, module) = setup().await;
    let service = module.service();
    service.create_client(new_client("Jane", "Smith")).await.unwrap();
    let celik = service.create_client(new_client("Ahmet", "ÇELİK")).await.unwrap();
    let zola = service.create_client(new_client("Émile", "Zola")).await.unwrap();

    let ids = |clients: Vec<Client>| clients.into_iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(ids(service.search_clients("çel").await.unwrap()), vec![celik.id]);
    assert_eq!(ids(service.search_clients("émi").await.unwrap()), vec![zola.id]);
    assert_eq!(ids(service.search_clients("ÉMI").await.unwrap()), vec![zola.id]);
}

#[tokio::test]
async fn renamed_client_is_found_by_new_name() {
    let (_, module) = setup().await;
    let service = module.service();
    let client = service.create_client(new_client("Jane", "Smith")).await.unwrap();
    service
        .update_client(
            client.id,
            ClientPatch {
                surname: Some("Øster".to_string()),
                ..ClientPatch::default()
            },
        )
        .await
        .unwrap();

    assert!(service.search_clients("smi").await.unwrap().is_empty());
    assert_eq!(service.search_clients("øST").await.unwrap().len(), 1);
}
