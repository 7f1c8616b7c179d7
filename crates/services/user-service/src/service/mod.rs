//! Service layer - Registry use cases.

mod users_service;

pub use users_service::{UserRegistry, UsersService};
