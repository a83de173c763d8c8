// Service module exports

pub mod database;
pub mod event;
pub mod repository;
pub mod segment;
pub mod settings;
pub mod task_sync;
pub mod visibility;
