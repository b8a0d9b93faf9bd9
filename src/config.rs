// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

pub const DB_ENV: &str = "MONEYLENS_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub verbose: bool,
}

impl AppConfig {
    /// `--db` wins over `MONEYLENS_DB`, which wins over the platform data dir.
    pub fn resolve(cli_db: Option<&str>, env_db: Option<String>, verbose: bool) -> Result<Self> {
        let db_path = match (cli_db.map(str::trim), env_db) {
            (Some(p), _) if !p.is_empty() => PathBuf::from(p),
            (_, Some(p)) if !p.trim().is_empty() => PathBuf::from(p.trim()),
            _ => crate::db::default_db_path()?,
        };
        Ok(Self { db_path, verbose })
    }

    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        Self::resolve(
            m.get_one::<String>("db").map(String::as_str),
            std::env::var(DB_ENV).ok(),
            m.get_flag("verbose"),
        )
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
