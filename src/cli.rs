// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("moneylens")
        .about("Reconcile and analyse personal-finance export archives")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_name("PATH")
                .help("SQLite file holding the persisted ledger (overrides MONEYLENS_DB)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log reconciliation and decoding details"),
        )
        .subcommand(
            Command::new("load")
                .about("Load an export archive, replacing the current ledger")
                .arg(Arg::new("path").long("path").required(true).value_name("ZIP")),
        )
        .subcommand(json_args(
            Command::new("summary").about("Totals, savings rate and daily average"),
        ))
        .subcommand(json_args(
            Command::new("budgets").about("Budgets reconciled against transactions"),
        ))
        .subcommand(
            Command::new("trends")
                .about("Spending over time")
                .subcommand_required(true)
                .subcommand(json_args(
                    Command::new("monthly").about("Income and expense per month"),
                ))
                .subcommand(json_args(
                    Command::new("weekly").about("Expense for the most recent weeks"),
                )),
        )
        .subcommand(json_args(
            Command::new("categories").about("Expense total and average per category"),
        ))
        .subcommand(json_args(
            Command::new("payments").about("Expense total per payment method"),
        ))
        .subcommand(json_args(Command::new("top").about("Largest expenses")))
        .subcommand(json_args(
            Command::new("recurring").about("Expenses repeating under the same description"),
        ))
        .subcommand(Command::new("analytics").about("Full analytics snapshot as JSON"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand_required(true)
                .subcommand(json_args(
                    Command::new("list")
                        .about("List active transactions")
                        .arg(Arg::new("type").long("type").value_name("INCOME|EXPENSE"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("payment-method").long("payment-method"))
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Case-insensitive match on description or notes"),
                        )
                        .arg(Arg::new("from").long("from").value_name("YYYY-MM-DD"))
                        .arg(Arg::new("to").long("to").value_name("YYYY-MM-DD"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("reminders")
                .about("Payment reminders")
                .subcommand_required(true)
                .subcommand(json_args(Command::new("list").about("List payment reminders"))),
        )
        .subcommand(
            Command::new("export")
                .about("Export a collection")
                .subcommand_required(true)
                .subcommand(export_cmd("transactions"))
                .subcommand(export_cmd("budgets"))
                .subcommand(export_cmd("reminders")),
        )
        .subcommand(Command::new("clear").about("Remove all loaded and persisted data"))
}

fn export_cmd(name: &'static str) -> Command {
    Command::new(name)
        .arg(
            Arg::new("format")
                .long("format")
                .default_value("csv")
                .value_name("csv|json"),
        )
        .arg(Arg::new("out").long("out").required(true).value_name("PATH"))
}
