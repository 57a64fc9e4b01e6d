use std::sync::Arc;

use folio_core::{DomainError, UserDirectory};
use folio_infra::InMemoryUserRepository;

fn directory() -> UserDirectory {
    UserDirectory::new(Arc::new(InMemoryUserRepository::new()))
}

#[tokio::test]
async fn create_then_get_roundtrip() {
    let users = directory();

    let created = users.create("John Doe", "john.doe@example.com").await.unwrap();
    let loaded = users.get_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(loaded.name, "John Doe");
    assert_eq!(loaded.email, "john.doe@example.com");
}

#[tokio::test]
async fn duplicate_email_persists_one_user() {
    let users = directory();
    users.create("First", "x@example.com").await.unwrap();

    let err = users.create("Second", "x@example.com").await.unwrap_err();

    assert!(matches!(err, DomainError::DuplicateEmail(_)));
    assert_eq!(users.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn email_uniqueness_is_case_sensitive() {
    let users = directory();
    users.create("Lower", "x@example.com").await.unwrap();

    let upper = users.create("Upper", "X@example.com").await.unwrap();

    assert_eq!(upper.id, 2);
    assert_eq!(users.get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn get_all_in_insertion_order() {
    let users = directory();
    for (name, email) in [("A", "a@example.com"), ("B", "b@example.com"), ("C", "c@example.com")] {
        users.create(name, email).await.unwrap();
    }

    let names: Vec<String> = users
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.name)
        .collect();

    assert_eq!(names, ["A", "B", "C"]);
}

#[tokio::test]
async fn update_unknown_id_changes_nothing() {
    let users = directory();
    users.create("John Doe", "john.doe@example.com").await.unwrap();

    let result = users.update(42, "Ghost", "ghost@example.com").await.unwrap();

    assert!(result.is_none());
    let all = users.get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "John Doe");
}

#[tokio::test]
async fn update_to_other_users_email_fails() {
    let users = directory();
    let john = users.create("John Doe", "john.doe@example.com").await.unwrap();
    users.create("Jane Doe", "jane.doe@example.com").await.unwrap();

    let err = users
        .update(john.id, "John Doe", "jane.doe@example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::DuplicateEmail(_)));
    let john = users.get_by_id(john.id).await.unwrap().unwrap();
    assert_eq!(john.email, "john.doe@example.com");
}

#[tokio::test]
async fn update_keeping_own_email_succeeds() {
    let users = directory();
    let john = users.create("John Doe", "john.doe@example.com").await.unwrap();

    let updated = users
        .update(john.id, "Johnny Doe", "john.doe@example.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, john.id);
    assert_eq!(updated.name, "Johnny Doe");
    assert_eq!(updated.created_at, john.created_at);
}

#[tokio::test]
async fn delete_is_true_exactly_once() {
    let users = directory();
    let john = users.create("John Doe", "john.doe@example.com").await.unwrap();

    assert!(users.delete(john.id).await.unwrap());
    assert!(!users.delete(john.id).await.unwrap());
    assert!(!users.delete(john.id).await.unwrap());
    assert!(users.get_by_id(john.id).await.unwrap().is_none());
}

#[tokio::test]
async fn freed_email_can_be_registered_again() {
    let users = directory();
    let john = users.create("John Doe", "john.doe@example.com").await.unwrap();
    users.delete(john.id).await.unwrap();

    let again = users.create("John Again", "john.doe@example.com").await.unwrap();

    assert_eq!(again.id, 2);
}

#[tokio::test]
async fn unset_ids_are_invalid_arguments() {
    let users = directory();

    assert!(matches!(users.get_by_id(0).await, Err(DomainError::InvalidArgument(_))));
    assert!(matches!(
        users.update(0, "John Doe", "john.doe@example.com").await,
        Err(DomainError::InvalidArgument(_))
    ));
    assert!(matches!(users.delete(0).await, Err(DomainError::InvalidArgument(_))));
}
