use std::sync::Arc;

use folio_core::{DomainError, PostCatalog, UserDirectory};
use folio_infra::{InMemoryPostRepository, InMemoryUserRepository};

fn services() -> (UserDirectory, PostCatalog) {
    let users = Arc::new(InMemoryUserRepository::new());
    let posts = Arc::new(InMemoryPostRepository::new());
    (
        UserDirectory::new(users.clone()),
        PostCatalog::new(posts, users),
    )
}

#[tokio::test]
async fn post_for_john_doe() {
    let (users, posts) = services();
    let john = users.create("John Doe", "john.doe@example.com").await.unwrap();
    assert_eq!(john.id, 1);

    let post = posts.create(1, "Test Post", "Test Content").await.unwrap();

    assert_eq!(post.id, 1);
    assert_eq!(post.user_id, 1);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.content, "Test Content");

    let owned = posts.get_by_owner(1).await.unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].id, post.id);
}

#[tokio::test]
async fn unknown_owner_is_not_found_and_persists_nothing() {
    let (_users, posts) = services();

    let err = posts.create(999, "Test Post", "Test Content").await.unwrap_err();

    assert!(matches!(err, DomainError::NotFound { entity_type: "User", id: 999 }));
    assert!(posts.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_by_owner_distinguishes_unknown_owner_from_no_posts() {
    let (users, posts) = services();
    let john = users.create("John Doe", "john.doe@example.com").await.unwrap();

    assert!(posts.get_by_owner(john.id).await.unwrap().is_empty());
    assert!(matches!(
        posts.get_by_owner(john.id + 1).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn get_by_owner_filters_other_owners() {
    let (users, posts) = services();
    let john = users.create("John Doe", "john.doe@example.com").await.unwrap();
    let jane = users.create("Jane Doe", "jane.doe@example.com").await.unwrap();
    posts.create(john.id, "John 1", "Body").await.unwrap();
    posts.create(jane.id, "Jane 1", "Body").await.unwrap();
    posts.create(john.id, "John 2", "Body").await.unwrap();

    let titles: Vec<String> = posts
        .get_by_owner(john.id)
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();

    assert_eq!(titles, ["John 1", "John 2"]);
    assert_eq!(posts.get_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn update_rewrites_title_and_content_only() {
    let (users, posts) = services();
    let john = users.create("John Doe", "john.doe@example.com").await.unwrap();
    let post = posts.create(john.id, "Test Post", "Test Content").await.unwrap();

    let updated = posts
        .update(post.id, "Updated Title", "Updated Content")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, post.id);
    assert_eq!(updated.user_id, john.id);
    assert_eq!(updated.title, "Updated Title");
    assert_eq!(posts.get_by_id(post.id).await.unwrap().unwrap().content, "Updated Content");
}

#[tokio::test]
async fn update_unknown_post_is_none() {
    let (_users, posts) = services();

    assert!(posts.update(3, "Title", "Body").await.unwrap().is_none());
    assert!(posts.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_post_once() {
    let (users, posts) = services();
    let john = users.create("John Doe", "john.doe@example.com").await.unwrap();
    let post = posts.create(john.id, "Test Post", "Test Content").await.unwrap();

    assert!(posts.delete(post.id).await.unwrap());
    assert!(!posts.delete(post.id).await.unwrap());
    assert!(posts.get_by_id(post.id).await.unwrap().is_none());
}

// User deletion neither cascades to nor is blocked by the user's posts.
#[tokio::test]
async fn deleting_owner_leaves_dangling_posts() {
    let (users, posts) = services();
    let john = users.create("John Doe", "john.doe@example.com").await.unwrap();
    let post = posts.create(john.id, "Test Post", "Test Content").await.unwrap();

    assert!(users.delete(john.id).await.unwrap());

    let orphan = posts.get_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(orphan.user_id, john.id);
    assert!(matches!(
        posts.get_by_owner(john.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        posts.create(john.id, "Another", "Body").await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn unset_ids_are_invalid_arguments() {
    let (_users, posts) = services();

    assert!(matches!(posts.create(0, "T", "C").await, Err(DomainError::InvalidArgument(_))));
    assert!(matches!(posts.get_by_id(0).await, Err(DomainError::InvalidArgument(_))));
    assert!(matches!(posts.get_by_owner(-1).await, Err(DomainError::InvalidArgument(_))));
    assert!(matches!(posts.update(0, "T", "C").await, Err(DomainError::InvalidArgument(_))));
    assert!(matches!(posts.delete(0).await, Err(DomainError::InvalidArgument(_))));
}
