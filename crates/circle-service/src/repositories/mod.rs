pub mod event_repository;
pub mod user_repository;

#[cfg(test)]
pub mod memory;
