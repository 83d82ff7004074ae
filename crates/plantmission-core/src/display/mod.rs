//! Display wrappers and formatting for terminal output.
//!
//! Domain records implement `Display` directly where that is enough; values
//! that depend on the moment of display (care status, remaining mission time)
//! are wrapped in cards built by the keeper. All output is markdown so a
//! front end can render it richly or print it as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Cards, Results │    │   Formatted     │
//! │ (Plant, Mission)│───▶│  & Collections  │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: Plants, Missions and Badges lists
//! - [`results`]: outcomes of mutating commands
//! - [`status`]: one-line status messages
//! - [`datetime`]: timestamp and remaining-time formatting
//! - [`models`]: cards and `Display` impls for domain models
//!
//! ```rust
//! use plantmission_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Mission generation complete");
//! assert_eq!(status.to_string(), "Success: Mission generation complete\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Badges, Missions, Plants};
pub use datetime::{LocalDateTime, TimeLeft};
pub use models::{MissionCard, PlantCard};
pub use results::{CompletionResult, CreateResult, GenerationResult, UpdateResult, WateringResult};
pub use status::{OperationStatus, Severity};
