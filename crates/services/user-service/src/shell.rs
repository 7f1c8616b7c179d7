//! Line-oriented command shell over a [`UsersService`].
//!
//! One command per line, arguments separated by whitespace:
//!
//! ```text
//! add <name> <YYYY-MM-DD>
//! remove <name>
//! list
//! check <name> <YYYY-MM-DD>
//! birthdays <YYYY-MM-DD>
//! help
//! quit
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. A failing command
//! prints `error: <message>` and the shell keeps reading.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use common::{AppError, AppResult};
use domain::{User, DATE_FORMAT};

use crate::service::UsersService;

const HELP: &str = "\
commands:
  add <name> <YYYY-MM-DD>    register a user
  remove <name>              remove every user with that name
  list                       show all users
  check <name> <YYYY-MM-DD>  is that date the user's birthday?
  birthdays <YYYY-MM-DD>     users whose birthday falls on that date
  help                       show this message
  quit                       leave the shell";

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| AppError::invalid_date(input))
}

/// One parsed shell line.
///
/// Missing `add`/`check` arguments are kept as `None` so the service reports
/// them with its own field errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add {
        name: Option<String>,
        birth_date: Option<NaiveDate>,
    },
    Remove {
        name: String,
    },
    List,
    Check {
        name: Option<String>,
        date: Option<NaiveDate>,
    },
    Birthdays {
        date: NaiveDate,
    },
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let keyword = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match keyword.as_str() {
            "add" => {
                expect_at_most(&args, 2, "add <name> <YYYY-MM-DD>")?;
                ShellCommand::Add {
                    name: args.first().map(|name| name.to_string()),
                    birth_date: args.get(1).map(|date| parse_date(date)).transpose()?,
                }
            }
            "remove" => {
                expect_exactly(&args, 1, "remove <name>")?;
                ShellCommand::Remove {
                    name: args[0].to_string(),
                }
            }
            "list" => {
                expect_exactly(&args, 0, "list")?;
                ShellCommand::List
            }
            "check" => {
                expect_at_most(&args, 2, "check <name> <YYYY-MM-DD>")?;
                ShellCommand::Check {
                    name: args.first().map(|name| name.to_string()),
                    date: args.get(1).map(|date| parse_date(date)).transpose()?,
                }
            }
            "birthdays" => {
                expect_exactly(&args, 1, "birthdays <YYYY-MM-DD>")?;
                ShellCommand::Birthdays {
                    date: parse_date(args[0])?,
                }
            }
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => {
                return Err(AppError::bad_request(format!(
                    "unknown command '{}', try 'help'",
                    other
                )))
            }
        };

        Ok(command)
    }
}

fn expect_exactly(args: &[&str], count: usize, usage: &str) -> AppResult<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(AppError::bad_request(format!("usage: {}", usage)))
    }
}

fn expect_at_most(args: &[&str], count: usize, usage: &str) -> AppResult<()> {
    if args.len() <= count {
        Ok(())
    } else {
        Err(AppError::bad_request(format!("usage: {}", usage)))
    }
}

/// Execute a single command, writing its result to `out`.
pub fn execute<S, W>(service: &mut S, command: ShellCommand, out: &mut W) -> AppResult<()>
where
    S: UsersService + ?Sized,
    W: Write + ?Sized,
{
    match command {
        ShellCommand::Add { name, birth_date } => {
            service.create_new_user(name.as_deref(), birth_date)?;
            let user = User::new(name.unwrap_or_default(), birth_date);
            writeln!(out, "added {}", user)?;
        }
        ShellCommand::Remove { name } => {
            let removed = service.remove_user(&name);
            writeln!(out, "removed {} user(s)", removed)?;
        }
        ShellCommand::List => {
            let users = service.get_users();
            write_users(out, &users, "no users")?;
        }
        ShellCommand::Check { name, date } => {
            let user = name.as_deref().and_then(|name| service.find_user(name));
            let matched = service.is_birth_day(user.as_ref(), date)?;
            writeln!(out, "{}", if matched { "yes" } else { "no" })?;
        }
        ShellCommand::Birthdays { date } => {
            let users = service.birthdays_on(date);
            write_users(out, &users, "no birthdays")?;
        }
        ShellCommand::Help => writeln!(out, "{}", HELP)?,
        ShellCommand::Quit => {}
    }
    Ok(())
}

fn write_users<W: Write + ?Sized>(out: &mut W, users: &[User], empty: &str) -> AppResult<()> {
    if users.is_empty() {
        writeln!(out, "{}", empty)?;
    }
    for user in users {
        writeln!(out, "{}", user)?;
    }
    Ok(())
}

/// Read commands from `input` until end of input or `quit`.
///
/// Command failures, including lines that are not valid UTF-8, are printed
/// and do not stop the loop; only I/O errors on `input` or `output` are
/// returned.
pub fn run<S, R, W>(service: &mut S, mut input: R, mut output: W) -> AppResult<()>
where
    S: UsersService + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(raw) => raw.trim(),
            Err(_) => {
                let err = AppError::bad_request("line is not valid UTF-8");
                writeln!(output, "error: {}", err.user_message())?;
                continue;
            }
        };
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let outcome = match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => execute(&mut *service, command, &mut output),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(()) => {}
            Err(AppError::Io(err)) => return Err(AppError::Io(err)),
            Err(err) => {
                tracing::debug!(code = err.code(), line, "shell command failed");
                writeln!(output, "error: {}", err.user_message())?;
            }
        }
    }

    output.flush()?;
    Ok(())
}
