// Module exports for models

pub mod event;
pub mod occurrence;
pub mod project;
pub mod recurrence;
pub mod settings;
pub mod visibility;
