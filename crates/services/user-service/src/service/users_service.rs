//! Users service - Registry use cases.
//!
//! Every operation validates its inputs before touching the repository, so a
//! failed call leaves the registry exactly as it was.

use chrono::NaiveDate;
use tracing::debug;

use domain::{is_anniversary, is_valid_name, DomainResult, FieldError, User};

use crate::repository::{UserRepository, UserStore};

/// Users service trait for dependency injection.
pub trait UsersService {
    /// Validate and append a new user.
    ///
    /// Fails with [`FieldError::EmptyName`] when the name is missing or empty,
    /// then with [`FieldError::MissingBirthDate`] when the birth date is missing.
    fn create_new_user(&mut self, name: Option<&str>, birth_date: Option<NaiveDate>)
        -> DomainResult<()>;

    /// Remove every user with this name. Unknown names are a no-op.
    fn remove_user(&mut self, name: &str) -> usize;

    /// Check whether `compare_date` is the user's birthday, ignoring the year.
    ///
    /// Fails with [`FieldError::MissingUserOrBirthDate`] when the user or their
    /// birth date is missing, then with [`FieldError::MissingCompareDate`].
    fn is_birth_day(&self, user: Option<&User>, compare_date: Option<NaiveDate>)
        -> DomainResult<bool>;

    /// Snapshot of the registry in insertion order
    fn get_users(&self) -> Vec<User>;

    /// First user registered under this exact name
    fn find_user(&self, name: &str) -> Option<User>;

    /// Users whose birthday falls on `date`, in insertion order
    fn birthdays_on(&self, date: NaiveDate) -> Vec<User>;
}

/// Concrete implementation of UsersService using a repository.
pub struct UserRegistry<R: UserRepository = UserStore> {
    repo: R,
}

impl UserRegistry<UserStore> {
    /// Create a registry over an initial (possibly empty) sequence of users.
    ///
    /// The initial users are stored as given, without validation.
    pub fn new(users: Vec<User>) -> Self {
        Self::with_repository(UserStore::new(users))
    }
}

impl Default for UserRegistry<UserStore> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: UserRepository> UserRegistry<R> {
    /// Create registry over an arbitrary repository
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}

impl<R: UserRepository> UsersService for UserRegistry<R> {
    fn create_new_user(
        &mut self,
        name: Option<&str>,
        birth_date: Option<NaiveDate>,
    ) -> DomainResult<()> {
        let name = name
            .filter(|name| is_valid_name(name))
            .ok_or(FieldError::EmptyName)?;
        let birth_date = birth_date.ok_or(FieldError::MissingBirthDate)?;

        if self.repo.find_by_name(name).is_some() {
            debug!(name, "registering another user under an existing name");
        }

        let user = User::new(name, Some(birth_date));
        debug!(user = %user, "user created");
        self.repo.insert(user);
        Ok(())
    }

    fn remove_user(&mut self, name: &str) -> usize {
        let removed = self.repo.remove_by_name(name);
        debug!(name, removed, "users removed");
        removed
    }

    fn is_birth_day(
        &self,
        user: Option<&User>,
        compare_date: Option<NaiveDate>,
    ) -> DomainResult<bool> {
        let birth_date = user
            .and_then(User::birth_date)
            .ok_or(FieldError::MissingUserOrBirthDate)?;
        let compare_date = compare_date.ok_or(FieldError::MissingCompareDate)?;

        Ok(is_anniversary(birth_date, compare_date))
    }

    fn get_users(&self) -> Vec<User> {
        self.repo.list()
    }

    fn find_user(&self, name: &str) -> Option<User> {
        self.repo.find_by_name(name)
    }

    fn birthdays_on(&self, date: NaiveDate) -> Vec<User> {
        self.repo
            .list()
            .into_iter()
            .filter(|user| matches!(self.is_birth_day(Some(user), Some(date)), Ok(true)))
            .collect()
    }
}
