#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Domain service tests over the in-memory repository

mod common;

use common::{new_user, role_names, service};
use user_service::contract::*;

#[tokio::test]
async fn create_then_fetch() {
    let (service, _) = service();
    let created = service
        .create_user(NewUser {
            email: "JDoe@Firm.Example".to_string(),
            first_name: Some("Jane".to_string()),
            keycloak_id: Some("kc-123".to_string()),
            ..new_user("jdoe", &["lawyer", "role_assistant"])
        })
        .await
        .unwrap();

    assert!(created.enabled);
    assert_eq!(created.email, "jdoe@firm.example");
    assert_eq!(role_names(&created), vec!["ASSISTANT", "LAWYER"]);

    let fetched = service.get_user(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(
        service.get_user_by_username("jdoe").await.unwrap().id,
        created.id
    );
}

#[tokio::test]
async fn unknown_role_is_rejected() {
    let (service, store) = service();
    let err = service
        .create_user(new_user("jdoe", &["JUDGE"]))
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::Validation { ref fields, .. } if fields.contains_key("roles")));
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn duplicate_username_and_email_conflict() {
    let (service, _) = service();
    service.create_user(new_user("jdoe", &[])).await.unwrap();

    let err = service
        .create_user(NewUser {
            email: "other@firm.example".to_string(),
            ..new_user("jdoe", &[])
        })
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::Conflict { ref fields, .. } if fields.contains_key("username")));

    let err = service
        .create_user(NewUser {
            email: "JDOE@firm.example".to_string(),
            ..new_user("other", &[])
        })
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::Conflict { ref fields, .. } if fields.contains_key("email")));
}

#[tokio::test]
async fn update_overlays_and_may_keep_own_email() {
    let (service, _) = service();
    let user = service.create_user(new_user("jdoe", &["LAWYER"])).await.unwrap();

    let updated = service
        .update_user(
            user.id,
            UserPatch {
                email: Some("jdoe@firm.example".to_string()),
                last_name: Some("Doe".to_string()),
                enabled: Some(false),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.last_name.as_deref(), Some("Doe"));
    assert!(!updated.enabled);
    assert_eq!(role_names(&updated), vec!["LAWYER"]);
    assert!(updated.updated_at >= user.updated_at);
}

#[tokio::test]
async fn empty_patch_only_touches_updated_at() {
    let (service, _) = service();
    let user = service.create_user(new_user("jdoe", &["LAWYER"])).await.unwrap();
    let updated = service
        .update_user(user.id, UserPatch::default())
        .await
        .unwrap();

    assert_eq!(
        User {
            updated_at: user.updated_at,
            ..updated.clone()
        },
        user
    );
    assert!(updated.updated_at >= user.updated_at);
}

#[tokio::test]
async fn user_deleted_during_update_is_not_found() {
    let (service, store) = service();
    let user = service.create_user(new_user("jdoe", &["LAWYER"])).await.unwrap();

    store.delete_before_next_update();
    let err = service
        .update_user(
            user.id,
            UserPatch {
                first_name: Some("John".to_string()),
                ..UserPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, UserError::NotFound { resource: "User", .. }));

    let other = service.create_user(new_user("asmith", &["LAWYER"])).await.unwrap();
    store.delete_before_next_update();
    assert!(matches!(
        service.add_role(other.id, "ADMIN").await,
        Err(UserError::NotFound { resource: "User", .. })
    ));
    assert_eq!(store.count(), 0);
}

#[tokio::test]
async fn role_management() {
    let (service, _) = service();
    let user = service.create_user(new_user("jdoe", &["LAWYER"])).await.unwrap();

    let user = service.add_role(user.id, "admin").await.unwrap();
    assert_eq!(role_names(&user), vec!["ADMIN", "LAWYER"]);

    // Granting a held role is a no-op
    let again = service.add_role(user.id, "ADMIN").await.unwrap();
    assert_eq!(again.roles, user.roles);

    let user = service.remove_role(user.id, "lawyer").await.unwrap();
    assert_eq!(role_names(&user), vec!["ADMIN"]);

    let err = service.remove_role(user.id, "LAWYER").await.unwrap_err();
    assert!(matches!(err, UserError::NotFound { resource: "Role", .. }));

    let user = service
        .replace_roles(user.id, vec!["assistant".to_string(), "client".to_string()])
        .await
        .unwrap();
    assert_eq!(role_names(&user), vec!["ASSISTANT", "CLIENT"]);

    assert!(matches!(
        service.add_role(user.id, "JUDGE").await,
        Err(UserError::Validation { .. })
    ));
    assert!(matches!(
        service.replace_roles(user.id, vec!["JUDGE".to_string()]).await,
        Err(UserError::Validation { .. })
    ));
    assert!(matches!(
        service.add_role(999, "ADMIN").await,
        Err(UserError::NotFound { resource: "User", .. })
    ));
}

#[tokio::test]
async fn delete_then_fetch_is_not_found() {
    let (service, _) = service();
    let user = service.create_user(new_user("jdoe", &[])).await.unwrap();
    service.delete_user(user.id).await.unwrap();

    assert!(matches!(
        service.get_user(user.id).await,
        Err(UserError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete_user(user.id).await,
        Err(UserError::NotFound { .. })
    ));
    assert!(matches!(
        service.get_user_by_username("jdoe").await,
        Err(UserError::NotFound { .. })
    ));
}
