//! Read-only data provider backed by process memory.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::age::current_age;
use crate::error::DataError;
use crate::seed;
use crate::types::{NewUser, PhotoRecord, PhotoSeed, ProfileRecord, ProfileSeed, User};

/// Source of the deck and profile.
///
/// Reads are side-effect free and return owned snapshots, so callers may
/// hold them across renders without locking the store.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Ordered photo list; order defines the swipe sequence.
    async fn get_photos(&self) -> Result<Vec<PhotoRecord>, DataError>;

    /// The single profile, with `age` derived at read time.
    async fn get_profile(&self) -> Result<ProfileRecord, DataError>;

    async fn get_user(&self, id: u32) -> Result<Option<User>, DataError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DataError>;

    /// Insert a user with the next sequential id (starting at 1).
    async fn create_user(&self, user: NewUser) -> Result<User, DataError>;
}

#[derive(Debug)]
struct UserTable {
    users: HashMap<u32, User>,
    next_id: u32,
}

/// In-memory [`Storage`] seeded once at construction.
#[derive(Debug)]
pub struct MemStorage {
    photos: Vec<PhotoSeed>,
    profile: ProfileSeed,
    users: RwLock<UserTable>,
}

impl MemStorage {
    pub fn new(photos: Vec<PhotoSeed>, profile: ProfileSeed) -> Self {
        Self {
            photos,
            profile,
            users: RwLock::new(UserTable {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Store holding the bundled deck and profile from [`seed`].
    pub fn seeded() -> Self {
        Self::new(seed::photos(), seed::profile())
    }

    fn owner_age(&self) -> u32 {
        current_age(self.profile.birthdate)
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_photos(&self) -> Result<Vec<PhotoRecord>, DataError> {
        let age = self.owner_age();
        Ok(self.photos.iter().map(|p| p.to_record(age)).collect())
    }

    async fn get_profile(&self) -> Result<ProfileRecord, DataError> {
        Ok(self.profile.to_record(self.owner_age()))
    }

    async fn get_user(&self, id: u32) -> Result<Option<User>, DataError> {
        let table = self
            .users
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(table.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DataError> {
        let table = self
            .users
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(table
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, DataError> {
        let mut table = self
            .users
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if table.users.values().any(|u| u.username == user.username) {
            return Err(DataError::DuplicateUsername(user.username));
        }

        let id = table.next_id;
        table.next_id += 1;
        let created = User {
            id,
            username: user.username,
            password: user.password,
        };
        table.users.insert(id, created.clone());
        debug!(user_id = id, "created user");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str) -> NewUser {
        NewUser {
            username: name.into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn photos_carry_the_owner_age() {
        let storage = MemStorage::seeded();
        let photos = storage.get_photos().await.unwrap();
        let expected = current_age(seed::birthdate());

        assert_eq!(photos.len(), 8);
        assert!(photos.iter().all(|p| p.age == expected));
        assert_eq!(photos[4].src, "/assets/images/profile-suit-smile-5.jpg");
    }

    #[tokio::test]
    async fn profile_age_is_derived_from_birthdate() {
        let storage = MemStorage::seeded();
        let profile = storage.get_profile().await.unwrap();

        assert_eq!(profile.age, current_age(profile.birthdate));
        assert_eq!(profile.interests.len(), 7);
        assert_eq!(profile.social_links.len(), 4);
    }

    #[tokio::test]
    async fn empty_deck_is_allowed() {
        let storage = MemStorage::new(Vec::new(), seed::profile());
        assert!(storage.get_photos().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn users_get_sequential_ids() {
        let storage = MemStorage::seeded();
        let first = storage.create_user(new_user("alex")).await.unwrap();
        let second = storage.create_user(new_user("sam")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(storage.get_user(2).await.unwrap(), Some(second));
        assert_eq!(storage.get_user(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn lookup_by_username() {
        let storage = MemStorage::seeded();
        storage.create_user(new_user("alex")).await.unwrap();

        let found = storage.get_user_by_username("alex").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(1));
        assert!(storage.get_user_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_usernames_are_rejected() {
        let storage = MemStorage::seeded();
        storage.create_user(new_user("alex")).await.unwrap();

        let err = storage.create_user(new_user("alex")).await.unwrap_err();
        assert_eq!(err, DataError::DuplicateUsername("alex".into()));
    }
}
