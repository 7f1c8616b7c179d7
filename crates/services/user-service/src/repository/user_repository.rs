//! In-memory user repository.
//!
//! Users are kept in insertion order. Nothing outlives the process.

use domain::User;

#[cfg(test)]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(test, automock)]
pub trait UserRepository: Send {
    /// Append a user at the end of the sequence
    fn insert(&mut self, user: User);

    /// Remove every user with exactly this name, returning how many were removed
    fn remove_by_name(&mut self, name: &str) -> usize;

    /// Find the first user with exactly this name
    fn find_by_name(&self, name: &str) -> Option<User>;

    /// Snapshot of all users in insertion order
    fn list(&self) -> Vec<User>;

    /// Number of stored users
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Concrete `Vec`-backed implementation of UserRepository
#[derive(Debug, Default, Clone)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    /// Create a repository holding `users` as its initial sequence
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl UserRepository for UserStore {
    fn insert(&mut self, user: User) {
        self.users.push(user);
    }

    fn remove_by_name(&mut self, name: &str) -> usize {
        let before = self.users.len();
        self.users.retain(|user| user.name() != name);
        before - self.users.len()
    }

    fn find_by_name(&self, name: &str) -> Option<User> {
        self.users.iter().find(|user| user.name() == name).cloned()
    }

    fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    fn len(&self) -> usize {
        self.users.len()
    }
}
