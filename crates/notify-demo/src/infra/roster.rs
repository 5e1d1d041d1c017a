use std::{fs, path::Path};

use anyhow::Context;
use notify_core::User;
use serde::Deserialize;
use tracing::{info, warn};

use crate::infra::config::{Config, ROSTER};

/// A bare list of users, or the same list under a top-level `users:` key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RosterFile {
    List(Vec<User>),
    Keyed { users: Vec<User> },
}

impl From<RosterFile> for Vec<User> {
    fn from(file: RosterFile) -> Self {
        match file {
            RosterFile::List(users) | RosterFile::Keyed { users } => users,
        }
    }
}

pub fn load(config: &Config) -> anyhow::Result<Vec<User>> {
    let Some(path) = config.optional(ROSTER) else {
        return Ok(default_roster());
    };

    let users = from_file(Path::new(path))?;
    info!(path, count = users.len(), "roster loaded");
    if users.is_empty() {
        warn!(path, "roster has no users, broadcasts will reach nobody");
    }
    Ok(users)
}

fn from_file(path: &Path) -> anyhow::Result<Vec<User>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster {}", path.display()))?;
    parse(&raw).with_context(|| format!("failed to parse roster {}", path.display()))
}

fn parse(raw: &str) -> anyhow::Result<Vec<User>> {
    let file: RosterFile = serde_yaml::from_str(raw)?;
    Ok(file.into())
}

pub fn default_roster() -> Vec<User> {
    vec![
        User::new("Ana", "ana@example.com", "+52-55-1111"),
        User::new("Carlos", "carlos@example.com", "+52-55-2222"),
        User::new("Bea", "bea@example.com", "+52-55-3333"),
    ]
}
