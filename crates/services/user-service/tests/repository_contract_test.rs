//! Behaviour every UserRepository adapter must share.
//!
//! The same checks run against the in-memory store and the SeaORM store over
//! an in-memory SQLite database.

use std::sync::Arc;
use std::time::Duration;

use common::{AppError, DatabaseConfig};
use domain::{NewUser, UserChanges};
use user_service_lib::infra::Database;
use user_service_lib::repository::{InMemoryUserStore, UserRepository, UserStore};

fn new_user(email: &str, name: &str) -> NewUser {
    NewUser::new(email, name).unwrap()
}

async fn sqlite_store() -> UserStore {
    let db = Database::connect(&DatabaseConfig::sqlite_memory())
        .await
        .expect("sqlite connects and migrates");
    UserStore::new(db.get_connection())
}

async fn create_and_find(repo: Arc<dyn UserRepository>) {
    let created = repo
        .create(new_user("Ada@Example.com", "  Ada Lovelace "))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.email, "ada@example.com");
    assert_eq!(created.name, "Ada Lovelace");
    assert_eq!(created.created_at, created.updated_at);

    let by_id = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, created.email);
    assert_eq!(by_id.name, created.name);

    let by_email = repo.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, created.id);

    let other = repo.create(new_user("bob@example.com", "Bob")).await.unwrap();
    assert_ne!(other.id, created.id);
}

async fn duplicate_email_conflicts(repo: Arc<dyn UserRepository>) {
    repo.create(new_user("dup@example.com", "First")).await.unwrap();

    let err = repo
        .create(new_user("DUP@example.com", "Second"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");
    assert_eq!(repo.count().await.unwrap(), 1);
}

async fn missing_users_are_none(repo: Arc<dyn UserRepository>) {
    assert!(repo.find_by_id(12345).await.unwrap().is_none());
    assert!(repo
        .find_by_email("nobody@example.com")
        .await
        .unwrap()
        .is_none());
    assert!(repo
        .update(12345, UserChanges::new(None, Some("Ghost")).unwrap())
        .await
        .unwrap()
        .is_none());
    assert!(!repo.delete(12345).await.unwrap());

    // Absence wins over an email conflict.
    repo.create(new_user("taken@example.com", "Taken")).await.unwrap();
    assert!(repo
        .update(
            12345,
            UserChanges::new(Some("taken@example.com"), None).unwrap()
        )
        .await
        .unwrap()
        .is_none());
}

async fn update_merges_fields(repo: Arc<dyn UserRepository>) {
    let created = repo
        .create(new_user("grace@example.com", "Grace"))
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;

    let renamed = repo
        .update(created.id, UserChanges::new(None, Some("Grace Hopper")).unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.email, "grace@example.com");
    assert_eq!(renamed.name, "Grace Hopper");
    assert!(renamed.updated_at > created.updated_at);

    let moved = repo
        .update(
            created.id,
            UserChanges::new(Some("Hopper@Navy.mil"), None).unwrap(),
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.email, "hopper@navy.mil");
    assert_eq!(moved.name, "Grace Hopper");

    let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.email, "hopper@navy.mil");
}

async fn update_to_taken_email_conflicts(repo: Arc<dyn UserRepository>) {
    repo.create(new_user("one@example.com", "One")).await.unwrap();
    let two = repo.create(new_user("two@example.com", "Two")).await.unwrap();

    let err = repo
        .update(two.id, UserChanges::new(Some("one@example.com"), None).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)), "got {err:?}");

    // Re-saving your own email is not a conflict.
    let same = repo
        .update(two.id, UserChanges::new(Some("two@example.com"), None).unwrap())
        .await
        .unwrap();
    assert!(same.is_some());
}

async fn delete_removes_once(repo: Arc<dyn UserRepository>) {
    let created = repo
        .create(new_user("temp@example.com", "Temp"))
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert_eq!(repo.count().await.unwrap(), 0);
}

async fn list_pages_in_id_order(repo: Arc<dyn UserRepository>) {
    let mut ids = Vec::new();
    for i in 0..5 {
        let user = repo
            .create(new_user(&format!("user{i}@example.com"), &format!("User {i}")))
            .await
            .unwrap();
        ids.push(user.id);
    }

    assert_eq!(repo.count().await.unwrap(), 5);

    let all: Vec<_> = repo
        .list(100, 0)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(all, ids);

    let page: Vec<_> = repo
        .list(2, 1)
        .await
        .unwrap()
        .into_iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(page, ids[1..3].to_vec());

    assert!(repo.list(10, 5).await.unwrap().is_empty());
}

macro_rules! contract_tests {
    ($($name:ident),* $(,)?) => {
        mod in_memory {
            use super::*;
            $(
                #[tokio::test]
                async fn $name() {
                    super::$name(Arc::new(InMemoryUserStore::new())).await;
                }
            )*
        }

        mod sqlite {
            use super::*;
            $(
                #[tokio::test]
                async fn $name() {
                    super::$name(Arc::new(sqlite_store().await)).await;
                }
            )*
        }
    };
}

contract_tests!(
    create_and_find,
    duplicate_email_conflicts,
    missing_users_are_none,
    update_merges_fields,
    update_to_taken_email_conflicts,
    delete_removes_once,
    list_pages_in_id_order,
);
