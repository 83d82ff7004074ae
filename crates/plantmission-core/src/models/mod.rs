//! Data models for plants and missions.
//!
//! This module contains the core domain records. Display implementations live
//! in [`crate::display`] so the records stay free of presentation concerns.
//!
//! - [`Plant`]: a houseplant and its care facts. Derived schedule values are
//!   computed by [`crate::schedule`], never stored.
//! - [`Mission`]: a rewarded care task, immutable once generated.
//! - [`Profile`]: a read-only overview assembled by the garden.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use plantmission_core::models::Plant;
//!
//! let mut plant = Plant::new(
//!     1,
//!     "Fiddle Leaf Fig",
//!     "Ficus lyrata",
//!     "Living room",
//!     85,
//!     Timestamp::now(),
//!     Timestamp::now(),
//!     7,
//!     30,
//!     Timestamp::now(),
//! );
//!
//! // Health writes are clamped into 0..=100.
//! plant.set_health(140);
//! assert_eq!(plant.health(), 100);
//! ```

pub mod filters;
pub mod mission;
pub mod plant;
pub mod status;
pub mod summary;

#[cfg(test)]
mod tests;

pub use filters::{CompletionFilter, MissionFilter};
pub use mission::Mission;
pub use plant::{Plant, MAX_HEALTH};
pub use status::{Difficulty, MissionKind};
pub use summary::Profile;
