//! User Store Contract
//!
//! Port between the account workflow and whatever persistence layer backs
//! it. The workflow only ever needs four operations; the document-database
//! driver itself lives outside this crate.
//!
//! Registration is check-then-create and therefore racy on its own: two
//! concurrent registrations for the same email can both pass the existence
//! check. Stores should enforce a uniqueness constraint on email and report
//! violations as [`StoreError::Duplicate`], which the workflow maps to the
//! duplicate-email error.

use crate::models::{Profile, User};

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Store-level failures
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated
    #[error("duplicate key: {0}")]
    Duplicate(String),

    /// Opaque backend failure
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Fields required to create an account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub role: String,
    pub profile: Profile,
}

/// Persistence port for user accounts
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up an account by its email (the natural key)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up an account by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Create a new account
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Persist a mutated account
    async fn save(&self, user: &User) -> Result<User, StoreError>;
}

/// In-process store keyed by account id
///
/// Backs unit tests and demo wiring. Unlike a bare check-then-create,
/// `create` re-checks email uniqueness under the write lock, standing in
/// for a real store's unique index.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(user.email));
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            fullname: user.fullname,
            email: user.email,
            phone_number: user.phone_number,
            password_hash: user.password_hash,
            role: user.role,
            profile: user.profile,
            created_at: now,
            updated_at: now,
        };

        users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn save(&self, user: &User) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            fullname: "Jane Doe".into(),
            email: email.into(),
            phone_number: "555".into(),
            password_hash: "hash".into(),
            role: "applicant".into(),
            profile: Profile::default(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryStore::new();
        let created = store.create(new_user("jane@x.com")).await.unwrap();

        let by_email = store.find_by_email("jane@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);

        let by_id = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "jane@x.com");
    }

    #[tokio::test]
    async fn test_create_duplicate_email() {
        let store = MemoryStore::new();
        store.create(new_user("jane@x.com")).await.unwrap();

        let err = store.create(new_user("jane@x.com")).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let store = MemoryStore::new();
        let mut user = store.create(new_user("jane@x.com")).await.unwrap();

        user.fullname = "Jane Q. Doe".into();
        store.save(&user).await.unwrap();

        let found = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.fullname, "Jane Q. Doe");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let store = MemoryStore::new();
        assert!(store.find_by_email("nobody@x.com").await.unwrap().is_none());
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }
}
