//! Initial users loaded from a JSON seed file.
//!
//! The file is a JSON array of `{"name": ..., "birth_date": "YYYY-MM-DD"}`
//! objects. Either field may be `null` or absent; such records are rejected
//! with the same field errors as any other creation.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use common::AppResult;
use domain::User;

use crate::service::{UserRegistry, UsersService};

#[derive(Debug, Deserialize)]
struct SeedRecord {
    name: Option<String>,
    birth_date: Option<NaiveDate>,
}

/// Read and validate the users stored in `path`.
pub fn load_users(path: &Path) -> AppResult<Vec<User>> {
    let raw = fs::read_to_string(path)?;
    let users = parse_users(&raw)?;
    info!(path = %path.display(), count = users.len(), "seed users loaded");
    Ok(users)
}

/// Validate the users of a seed document, keeping file order.
pub fn parse_users(raw: &str) -> AppResult<Vec<User>> {
    let records: Vec<SeedRecord> = serde_json::from_str(raw)?;

    let mut registry = UserRegistry::new(Vec::with_capacity(records.len()));
    for record in records {
        registry.create_new_user(record.name.as_deref(), record.birth_date)?;
    }

    Ok(registry.get_users())
}
