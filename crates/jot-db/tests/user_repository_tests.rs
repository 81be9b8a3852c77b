mod common;

use common::create_test_pool;

use jot_core::{User, UserStatus};
use jot_db::UserRepository;

use googletest::prelude::*;

fn sample_user(email: &str) -> User {
    User::new(
        email.to_string(),
        "$argon2id$digest".to_string(),
        "Alice".to_string(),
    )
}

#[tokio::test]
async fn given_new_user_when_created_then_can_be_found_by_email_and_id() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let user = sample_user("alice@example.com");

    // When: Creating the user
    repo.create(&user).await.unwrap();

    // Then: Both lookups return the row
    let by_email = repo.find_by_email("alice@example.com").await.unwrap();
    assert_that!(by_email, some(anything()));
    let found = by_email.unwrap();
    assert_that!(found.id, eq(user.id));
    assert_that!(found.status, eq(UserStatus::Active));
    assert_that!(found.password_hash, eq(&user.password_hash));

    let by_id = repo.find_by_id(user.id).await.unwrap();
    assert_that!(by_id, some(anything()));
}

#[tokio::test]
async fn given_existing_email_when_created_again_then_unique_violation() {
    // Given: A user already registered with this email
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    repo.create(&sample_user("taken@example.com")).await.unwrap();

    // When: Creating a second user with the same email
    let err = repo
        .create(&sample_user("taken@example.com"))
        .await
        .unwrap_err();

    // Then: The error is a distinct unique violation, and no second row exists
    assert_that!(err.is_unique_violation(), eq(true));
}

#[tokio::test]
async fn given_empty_database_when_finding_unknown_email_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let result = repo.find_by_email("nobody@example.com").await.unwrap();

    assert_that!(result, none());
}
