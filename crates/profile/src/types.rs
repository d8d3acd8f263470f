//! Record types served by the data provider.
//!
//! ```text
//! ProfileSeed ──(age derived at read)──▶ ProfileRecord
//! PhotoSeed   ──(age derived at read)──▶ PhotoRecord
//! ```
//!
//! The read-side records serialize to the camelCase JSON the web client
//! consumes. A photo's category travels under the key `"type"`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of shot shown on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoCategory {
    Portrait,
    Casual,
    Professional,
}

/// One card in the swipe deck.
///
/// Records are immutable once loaded. The position of a record in the
/// list returned by [`Storage::get_photos`](crate::Storage::get_photos)
/// defines the swipe sequence; `id` is a stable key for the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRecord {
    pub id: u32,
    /// Image locator relative to the web root.
    pub src: String,
    pub alt: String,
    #[serde(rename = "type", alias = "category")]
    pub category: PhotoCategory,
    pub name: String,
    pub age: u32,
    pub profession: String,
}

/// A photo as stored, before the owner's age is filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSeed {
    pub id: u32,
    pub src: &'static str,
    pub alt: &'static str,
    pub category: PhotoCategory,
    pub name: &'static str,
    pub profession: &'static str,
}

impl PhotoSeed {
    /// Materialize the read-side record with a derived age.
    pub fn to_record(&self, age: u32) -> PhotoRecord {
        PhotoRecord {
            id: self.id,
            src: self.src.to_string(),
            alt: self.alt.to_string(),
            category: self.category,
            name: self.name.to_string(),
            age,
            profession: self.profession.to_string(),
        }
    }
}

/// A contact link rendered in the bio panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    /// Icon class name understood by the client.
    pub icon: String,
}

/// The single profile behind the deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: u32,
    pub name: String,
    /// Serialized as an RFC 3339 string.
    pub birthdate: DateTime<Utc>,
    /// Derived from `birthdate` when the record is read.
    pub age: u32,
    pub profession: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub social_links: Vec<SocialLink>,
}

/// Stored profile data; `age` is absent on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSeed {
    pub id: u32,
    pub name: String,
    pub birthdate: DateTime<Utc>,
    pub profession: String,
    pub bio: String,
    pub interests: Vec<String>,
    pub social_links: Vec<SocialLink>,
}

impl ProfileSeed {
    /// Materialize the read-side record with a derived age.
    pub fn to_record(&self, age: u32) -> ProfileRecord {
        ProfileRecord {
            id: self.id,
            name: self.name.clone(),
            birthdate: self.birthdate,
            age,
            profession: self.profession.clone(),
            bio: self.bio.clone(),
            interests: self.interests.clone(),
            social_links: self.social_links.clone(),
        }
    }
}

/// An account in the in-memory user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Input for [`Storage::create_user`](crate::Storage::create_user).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
