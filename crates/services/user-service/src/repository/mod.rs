//! Repository layer for data access.

mod user_repository;

pub use user_repository::{UserRepository, UserStore};

// Export mock for tests
#[cfg(test)]
pub use user_repository::MockUserRepository;
