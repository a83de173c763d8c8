// Project Calendar Library
// Event model, recurrence expansion and calendar view queries

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::{Event, EventColor, EventPatch, EventType, ValidationError};
pub use models::occurrence::Occurrence;
pub use models::recurrence::{Frequency, RecurrenceRule};
pub use models::visibility::VisibilityToggles;
pub use services::event::{EventStore, StoreError};
pub use utils::date::DateWindow;
