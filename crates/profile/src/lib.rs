//! SwipeCard Profile Layer
//!
//! Everything the card deck reads comes from here: the ordered photo list,
//! the single profile record, and the in-memory store that serves both.
//!
//! ## What we do here
//!
//! - **Define the records** - [`PhotoRecord`], [`ProfileRecord`] and
//!   [`SocialLink`], with the camelCase wire format the web client expects.
//! - **Seed the data** - the photo deck and profile are built once at
//!   process start (see [`seed`]).
//! - **Derive ages** - ages are never stored authoritatively; they are
//!   computed from the birthdate at read time with [`age_on`].
//! - **Serve reads** - the [`Storage`] trait and its [`MemStorage`]
//!   implementation hand out snapshots of the static data.
//!
//! ## Example
//!
//! ```
//! use profile::{MemStorage, Storage};
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! let photos = rt
//!     .block_on(async { MemStorage::seeded().get_photos().await })
//!     .unwrap();
//!
//! assert_eq!(photos.len(), 8);
//! assert_eq!(photos[0].id, 1);
//! ```

mod age;
mod error;
pub mod seed;
mod storage;
mod types;

pub use crate::age::{age_on, current_age};
pub use crate::error::DataError;
pub use crate::storage::{MemStorage, Storage};
pub use crate::types::{
    NewUser, PhotoCategory, PhotoRecord, PhotoSeed, ProfileRecord, ProfileSeed, SocialLink, User,
};
