// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use financeflow::commands::transactions;
use financeflow::models::{Category, Transaction, TransactionType};
use financeflow::cli;

fn sample() -> Vec<Transaction> {
    let mk = |id: &str, amount: i64, r#type, category, day: u32, desc: &str| Transaction {
        id: id.to_string(),
        amount: Decimal::from(amount),
        r#type,
        category,
        date: Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap(),
        description: desc.to_string(),
    };
    vec![
        mk("1", 5000, TransactionType::Income, Category::Salary, 1, "Monthly Salary"),
        mk("2", 1200, TransactionType::Expense, Category::Housing, 2, "Rent Payment"),
        mk("3", 400, TransactionType::Expense, Category::Food, 10, "Groceries"),
    ]
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["financeflow", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_orders_newest_first() {
    let rows = transactions::query_rows(&sample(), &list_matches(&[])).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].date, "2025-01-10");
    assert_eq!(rows[2].date, "2025-01-01");
}

#[test]
fn list_limit_respected() {
    let rows = transactions::query_rows(&sample(), &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-10");
}

#[test]
fn list_filters_by_type() {
    let rows = transactions::query_rows(&sample(), &list_matches(&["--type", "income"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Monthly Salary");
    assert_eq!(rows[0].amount, "+$5000.00");
}

#[test]
fn search_matches_description_and_category_case_insensitively() {
    let rows = transactions::query_rows(&sample(), &list_matches(&["--search", "RENT"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "Housing");

    let rows = transactions::query_rows(&sample(), &list_matches(&["--search", "food"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].description, "Groceries");
}

#[test]
fn unknown_type_filter_is_an_error() {
    assert!(transactions::query_rows(&sample(), &list_matches(&["--type", "transfer"])).is_err());
}
