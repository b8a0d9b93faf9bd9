// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use moneylens::config::AppConfig;
use moneylens::diagnostics::{Diagnostics, LogDiagnostics};
use moneylens::store::SqliteStore;
use moneylens::{LedgerStore, cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = AppConfig::from_matches(&matches)?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter()),
    )
    .init();

    let store = SqliteStore::new(db::open_or_init(&config.db_path)?)?;
    let diagnostics: Box<dyn Diagnostics> = if config.verbose {
        Box::new(LogDiagnostics)
    } else {
        Box::new(())
    };
    let mut ledger = LedgerStore::with_diagnostics(store, diagnostics);

    match matches.subcommand() {
        Some(("load", sub)) => {
            commands::load::handle(&mut ledger, sub)?;
        }
        Some((
            name @ ("summary" | "trends" | "categories" | "payments" | "top" | "recurring"
            | "analytics"),
            sub,
        )) => commands::reports::handle(&ledger, name, sub)?,
        Some(("budgets", sub)) => commands::budgets::handle(&ledger, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&ledger, sub)?,
        Some(("reminders", sub)) => commands::reminders::handle(&ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        Some(("clear", _)) => {
            ledger.clear();
            println!("Cleared all data from {}", config.db_path.display());
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
