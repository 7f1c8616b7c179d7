//! User Service Library
//!
//! In-memory user registry: creation, removal and birthday checks over an
//! ordered collection of users, with a command shell on top.
//! Nothing is persisted; an optional JSON seed file provides the initial users.

pub mod config;
pub mod repository;
pub mod seed;
pub mod service;
pub mod shell;

use std::io::{BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use common::{AppError, AppResult};

use crate::service::{UserRegistry, UsersService};
use crate::shell::ShellCommand;

/// Action requested from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print every user
    List,
    /// Check a single name/birth date pair against a date
    Check {
        name: String,
        birth_date: NaiveDate,
        on: NaiveDate,
    },
    /// Print users whose birthday falls on a date
    Birthdays { on: NaiveDate },
    /// Interactive shell
    Shell,
}

/// Build a registry holding the seed users, or an empty one.
pub fn open_registry(seed_file: Option<&Path>) -> AppResult<UserRegistry> {
    let users = match seed_file {
        Some(path) => seed::load_users(path)?,
        None => Vec::new(),
    };
    Ok(UserRegistry::new(users))
}

/// Run one action against a registry opened from `seed_file`.
///
/// `input` is only read by [`Action::Shell`]. [`Action::Check`] validates the
/// given pair on its own and rejects a seed file.
pub fn run_action<R, W>(
    action: Action,
    seed_file: Option<&Path>,
    input: R,
    mut output: W,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    match action {
        Action::List => {
            let mut registry = open_registry(seed_file)?;
            shell::execute(&mut registry, ShellCommand::List, &mut output)?;
        }
        Action::Check {
            name,
            birth_date,
            on,
        } => {
            if seed_file.is_some() {
                return Err(AppError::bad_request("check does not use a seed file"));
            }
            let mut registry = UserRegistry::new(Vec::new());
            registry.create_new_user(Some(&name), Some(birth_date))?;
            let command = ShellCommand::Check {
                name: Some(name),
                date: Some(on),
            };
            shell::execute(&mut registry, command, &mut output)?;
        }
        Action::Birthdays { on } => {
            let mut registry = open_registry(seed_file)?;
            shell::execute(&mut registry, ShellCommand::Birthdays { date: on }, &mut output)?;
        }
        Action::Shell => {
            let mut registry = open_registry(seed_file)?;
            info!(users = registry.len(), "starting shell, type 'help' for commands");
            shell::run(&mut registry, input, &mut output)?;
        }
    }

    output.flush()?;
    Ok(())
}
