// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneylens::cli;
use moneylens::config::AppConfig;
use std::path::PathBuf;

#[test]
fn flag_beats_environment() {
    let cfg = AppConfig::resolve(Some("/tmp/a.sqlite"), Some("/tmp/b.sqlite".into()), false)
        .unwrap();
    assert_eq!(cfg.db_path, PathBuf::from("/tmp/a.sqlite"));
    assert_eq!(cfg.log_filter(), "warn");
}

#[test]
fn environment_used_when_flag_missing_or_blank() {
    let cfg = AppConfig::resolve(None, Some(" /tmp/b.sqlite ".into()), true).unwrap();
    assert_eq!(cfg.db_path, PathBuf::from("/tmp/b.sqlite"));
    assert_eq!(cfg.log_filter(), "debug");

    let cfg = AppConfig::resolve(Some("  "), Some("/tmp/b.sqlite".into()), false).unwrap();
    assert_eq!(cfg.db_path, PathBuf::from("/tmp/b.sqlite"));
}

#[test]
fn global_flags_parse_after_subcommand() {
    let matches =
        cli::build_cli().get_matches_from(["moneylens", "summary", "--db", "/tmp/c.sqlite", "-v"]);
    assert_eq!(
        matches.get_one::<String>("db").map(String::as_str),
        Some("/tmp/c.sqlite")
    );
    assert!(matches.get_flag("verbose"));
}
